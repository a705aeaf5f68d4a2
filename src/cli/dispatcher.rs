//! Command dispatching.

use std::io::Write;

use crate::cli::args::{Invocation, USAGE};
use crate::detection::DetectionRunner;
use crate::error::Result;
use crate::ui::UserInterface;

/// Routes an [`Invocation`] to usage output or a detection run.
pub struct CommandDispatcher {
    runner: DetectionRunner,
}

impl CommandDispatcher {
    /// Create a dispatcher that detects with `runner`.
    pub fn new(runner: DetectionRunner) -> Self {
        Self { runner }
    }

    /// Execute `invocation`, writing the report to `out`.
    ///
    /// Help never touches the registry or starts a process.
    pub fn dispatch(
        &self,
        invocation: Invocation,
        out: &mut dyn Write,
        ui: &mut dyn UserInterface,
    ) -> Result<()> {
        tracing::debug!("Dispatching {:?}", invocation);

        if invocation.detects() {
            self.runner.run(out)?;
        } else {
            writeln!(out, "{}", USAGE)?;
        }
        out.flush()?;

        if invocation.waits_for_key() {
            ui.wait_for_key();
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::ui::MockUI;
    use std::path::PathBuf;

    fn dispatcher(snapshot: Option<PathBuf>) -> CommandDispatcher {
        CommandDispatcher::new(DetectionRunner::new(Settings {
            shell: Some("/nonexistent/shell-xyz".to_string()),
            snapshot,
            ..Settings::default()
        }))
    }

    fn snapshot_file(dir: &tempfile::TempDir) -> PathBuf {
        let path = dir.path().join("registry.yml");
        std::fs::write(
            &path,
            "SOFTWARE:\n  keys:\n    Microsoft:\n      keys:\n        NET Framework Setup:\n          keys:\n            NDP:\n              keys:\n                v4:\n                  keys:\n                    Full:\n                      values: { Release: 461808 }\n",
        )
        .unwrap();
        path
    }

    #[test]
    fn help_prints_usage_only() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut out = Vec::new();
        let mut ui = MockUI::new();

        dispatcher(Some(snapshot_file(&dir)))
            .dispatch(Invocation::Help, &mut out, &mut ui)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", USAGE));
        assert_eq!(ui.key_waits(), 0);
    }

    #[test]
    fn batch_detects_without_waiting() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut out = Vec::new();
        let mut ui = MockUI::new();

        dispatcher(Some(snapshot_file(&dir)))
            .dispatch(Invocation::Batch, &mut out, &mut ui)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "4.7.2\n");
        assert_eq!(ui.key_waits(), 0);
    }

    #[test]
    fn interactive_detects_then_waits() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut out = Vec::new();
        let mut ui = MockUI::new();

        dispatcher(Some(snapshot_file(&dir)))
            .dispatch(Invocation::Interactive, &mut out, &mut ui)
            .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "4.7.2\n");
        assert_eq!(ui.key_waits(), 1);
    }

    #[test]
    fn unreadable_snapshot_still_completes() {
        let mut out = Vec::new();
        let mut ui = MockUI::new();

        dispatcher(Some(PathBuf::from("/nonexistent/registry.yml")))
            .dispatch(Invocation::Batch, &mut out, &mut ui)
            .unwrap();

        assert!(out.is_empty());
    }
}
