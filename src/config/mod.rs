//! Run settings.
//!
//! [`Settings`] carries every tunable a detection run needs. The defaults
//! describe the real machine: the two .NET Framework registry locations, the
//! three `dotnet` queries and the platform shell. Two environment variables
//! override them:
//!
//! - `DOTNET_VERSIONS_SNAPSHOT` - read registry data from a YAML snapshot
//!   instead of the native registry
//! - `DOTNET_VERSIONS_SHELL` - shell program used for the `dotnet` queries
//!
//! # Example
//!
//! ```
//! use dotnet_versions::config::Settings;
//!
//! let settings = Settings::from_env_with(|key: &str| match key {
//!     "DOTNET_VERSIONS_SHELL" => Ok("/bin/sh".to_string()),
//!     _ => Err(std::env::VarError::NotPresent),
//! });
//! assert_eq!(settings.shell.as_deref(), Some("/bin/sh"));
//! assert!(settings.snapshot.is_none());
//! ```

use std::path::PathBuf;

/// Environment variable naming a YAML registry snapshot.
pub const SNAPSHOT_ENV: &str = "DOTNET_VERSIONS_SNAPSHOT";

/// Environment variable naming the shell program to launch.
pub const SHELL_ENV: &str = "DOTNET_VERSIONS_SHELL";

/// Registry root of the pre-4.5 .NET Framework install records.
pub const LEGACY_ROOT: &str = r"SOFTWARE\Microsoft\NET Framework Setup\NDP\";

/// Registry key of the 4.5-and-later install record.
pub const MODERN_KEY: &str = r"SOFTWARE\Microsoft\NET Framework Setup\NDP\v4\Full\";

/// Queries fed to the shell, in order.
pub const DOTNET_QUERIES: &[&str] = &[
    "dotnet --list-runtimes",
    "dotnet --version",
    "dotnet --list-sdks",
];

/// Settings for a detection run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Registry path walked by the legacy reader.
    pub legacy_root: String,

    /// Registry key read by the modern reader.
    pub modern_key: String,

    /// Commands fed to the shell session.
    pub queries: Vec<String>,

    /// Shell program override (None = platform default).
    pub shell: Option<String>,

    /// YAML registry snapshot used instead of the native registry.
    pub snapshot: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            legacy_root: LEGACY_ROOT.to_string(),
            modern_key: MODERN_KEY.to_string(),
            queries: DOTNET_QUERIES.iter().map(|q| q.to_string()).collect(),
            shell: None,
            snapshot: None,
        }
    }
}

impl Settings {
    /// Build settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_env_with(|key: &str| std::env::var(key))
    }

    /// Build settings with a custom env var lookup function.
    ///
    /// This allows testing without modifying actual environment variables.
    /// Empty values are treated as unset.
    pub fn from_env_with<F>(env_fn: F) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let lookup = |key: &str| env_fn(key).ok().filter(|v| !v.trim().is_empty());

        Self {
            shell: lookup(SHELL_ENV),
            snapshot: lookup(SNAPSHOT_ENV).map(PathBuf::from),
            ..Self::default()
        }
    }
}
