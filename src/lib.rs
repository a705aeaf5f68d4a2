//! dotnet-versions - list the .NET installations on a machine.
//!
//! The report has three parts, written in order to one output stream:
//!
//! 1. The output of `dotnet --list-runtimes`, `dotnet --version` and
//!    `dotnet --list-sdks`, run in one shell session
//! 2. .NET Framework versions before 4.5, read from the registry tree
//!    `HKLM\SOFTWARE\Microsoft\NET Framework Setup\NDP`
//! 3. The .NET Framework 4.5+ version, read from `NDP\v4\Full`
//!
//! # Modules
//!
//! - [`cli`] - Command-line switches and dispatch
//! - [`config`] - Run settings and their environment overrides
//! - [`detection`] - Registry readers and the detection runner
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Registry access traits and backends
//! - [`shell`] - Scoped shell sessions
//! - [`ui`] - Keypress wait
//!
//! # Example
//!
//! ```
//! use dotnet_versions::config::Settings;
//! use dotnet_versions::detection::DetectionRunner;
//! use dotnet_versions::registry::SnapshotTree;
//!
//! let tree = SnapshotTree::from_yaml_str(
//!     r#"
//! SOFTWARE:
//!   keys:
//!     Microsoft:
//!       keys:
//!         NET Framework Setup:
//!           keys:
//!             NDP:
//!               keys:
//!                 v3.5:
//!                   values: { Version: "3.5.30729.4926", SP: 1, Install: 1 }
//! "#,
//! )
//! .unwrap();
//!
//! let mut out = Vec::new();
//! DetectionRunner::new(Settings::default())
//!     .report_registry(&tree, &mut out)
//!     .unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "3.5.30729.4926 Service Pack 1\n");
//! ```

pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod registry;
pub mod shell;
pub mod ui;

pub use error::{DetectError, Result};
