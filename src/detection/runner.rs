//! Runs the detection steps in order and writes the report.

use std::io::Write;

use crate::config::Settings;
use crate::error::Result;
use crate::registry::{self, ConfigTree};
use crate::shell::{run_queries, shell_program};

use super::{legacy, modern};

/// Runs every detection step against one output stream.
///
/// Steps are independent: a step that finds nothing or fails to start
/// writes nothing, and the following steps still run.
#[derive(Debug, Clone)]
pub struct DetectionRunner {
    settings: Settings,
}

impl DetectionRunner {
    /// Create a runner for the given settings.
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Run the `dotnet` queries, then both registry readers.
    ///
    /// Only failures to write to `out` are returned.
    pub fn run(&self, out: &mut dyn Write) -> Result<()> {
        self.report_dotnet_cli(out)?;

        let tree = registry::local_machine(&self.settings);
        self.report_registry(tree.as_ref(), out)
    }

    /// Run the `dotnet` queries in one shell session and copy their output.
    pub fn report_dotnet_cli(&self, out: &mut dyn Write) -> Result<()> {
        let program = shell_program(self.settings.shell.as_deref());

        match run_queries(&program, &self.settings.queries) {
            Ok(output) => writeln!(out, "{}", output)?,
            Err(e) => tracing::debug!("Skipping dotnet queries: {}", e),
        }
        Ok(())
    }

    /// Report legacy versions, then the 4.5+ version, one per line.
    pub fn report_registry(&self, tree: &dyn ConfigTree, out: &mut dyn Write) -> Result<()> {
        for entry in legacy::scan(tree, &self.settings.legacy_root) {
            writeln!(out, "{}", entry)?;
        }

        if let Some(entry) = modern::scan(tree, &self.settings.modern_key) {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }
}
