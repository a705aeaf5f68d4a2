//! CLI argument definitions.
//!
//! The tool takes a single optional switch in any of the Windows and Unix
//! spellings (`/b`, `-b`, `--b`). Clap only collects the raw arguments; its
//! own help and version flags are disabled so every spelling reaches
//! [`Invocation::from_args`] untouched.

use std::ffi::{OsStr, OsString};

use clap::Parser;

/// Lists installed .NET runtimes, SDKs and .NET Framework versions.
#[derive(Debug, Parser)]
#[command(name = "dotnet-versions")]
#[command(about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Optional switch: -b/--b//b for batch mode, -help/--help//help or -?/--?//? for usage
    #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<OsString>,
}

/// Usage text printed for the help switch.
pub const USAGE: &str = "Writes all the currently installed versions of .NET Framework platform in the system.\n\
Use --b, -b or /b to use in a batch, showing only the installed versions, without any extra informational lines.";

/// Prefixes a switch may be written with.
const SWITCH_PREFIXES: &[&str] = &["/", "-", "--"];

/// What the first argument asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage and exit without detecting anything.
    Help,
    /// Detect and exit immediately.
    Batch,
    /// Detect, then wait for a keypress.
    Interactive,
}

impl Invocation {
    /// Classify the raw arguments. Only the first one is considered.
    ///
    /// Arguments that are not valid Unicode are compared lossily, so they
    /// can never match a switch and fall through to an interactive run.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Self {
        let Some(first) = args.first().map(|a| a.as_ref().to_string_lossy()) else {
            return Invocation::Interactive;
        };
        let first: &str = &first;

        if has_switch(first, "help") || has_switch(first, "?") {
            Invocation::Help
        } else if has_switch(first, "b") {
            Invocation::Batch
        } else {
            Invocation::Interactive
        }
    }

    /// Whether detection runs for this invocation.
    pub fn detects(&self) -> bool {
        !matches!(self, Invocation::Help)
    }

    /// Whether to wait for a keypress before exiting.
    pub fn waits_for_key(&self) -> bool {
        matches!(self, Invocation::Interactive)
    }
}

impl Cli {
    /// Parse the process arguments.
    ///
    /// Never exits on a parse error: whatever clap rejects is kept as raw
    /// arguments, which classify as an interactive run.
    pub fn parse_lenient() -> Self {
        Self::parse_lenient_from(std::env::args_os())
    }

    /// Parse `args` (program name first) the way [`Cli::parse_lenient`] does.
    pub fn parse_lenient_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        Self::try_parse_from(&args).unwrap_or_else(|e| {
            tracing::debug!("Argument parsing failed, using raw arguments: {}", e);
            Self {
                args: args.into_iter().skip(1).collect(),
            }
        })
    }

    /// Classify the parsed arguments.
    pub fn invocation(&self) -> Invocation {
        Invocation::from_args(&self.args)
    }
}

/// Check whether `arg` is switch `name` in any prefix spelling, ignoring case.
pub fn has_switch(arg: &str, name: &str) -> bool {
    let arg = arg.to_lowercase();
    let name = name.to_lowercase();

    SWITCH_PREFIXES
        .iter()
        .any(|prefix| arg.strip_prefix(prefix) == Some(name.as_str()))
}
