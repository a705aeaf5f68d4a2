//! Read-only access to the machine's hierarchical configuration registry.
//!
//! The detection readers never talk to a registry API directly. They go
//! through two small capability traits:
//!
//! - [`ConfigTree`] - the local-machine hive, opened by backslash-separated path
//! - [`ConfigKey`] - an open key: its child keys and its named values
//!
//! Two backends implement them:
//!
//! - [`windows::LocalMachine`] - the native Windows registry (Windows only)
//! - [`SnapshotTree`] - a YAML document mirroring the registry layout
//!
//! Open keys are owned values; dropping one releases its handle.
//!
//! # Example
//!
//! ```
//! use dotnet_versions::registry::{ConfigTree, SnapshotTree, Value};
//!
//! let tree = SnapshotTree::from_yaml_str(
//!     r#"
//! SOFTWARE:
//!   keys:
//!     Example:
//!       values: { Install: 1 }
//! "#,
//! )
//! .unwrap();
//!
//! let key = tree.open(r"SOFTWARE\Example\").unwrap();
//! assert_eq!(key.value("Install"), Some(Value::Number(1)));
//! ```

pub mod snapshot;
#[cfg(windows)]
pub mod windows;

pub use snapshot::{SnapshotNode, SnapshotTree};

use std::fmt;

use serde::Deserialize;

use crate::config::Settings;

/// A value stored under a registry key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// DWORD or QWORD data.
    Number(u64),
    /// String data.
    Text(String),
}

impl Value {
    /// Borrow the string data, if this is a string value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Number(_) => None,
        }
    }

    /// The numeric data, if this is a numeric value.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Value::Number(number) => Some(*number),
            Value::Text(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(number) => write!(f, "{}", number),
            Value::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Value::Number(number.into())
    }
}

/// An open registry key.
pub trait ConfigKey {
    /// Open an immediate child key by name.
    ///
    /// Returns `None` when the child does not exist or cannot be opened.
    fn open_child(&self, name: &str) -> Option<Box<dyn ConfigKey + '_>>;

    /// Names of the immediate child keys.
    fn child_names(&self) -> Vec<String>;

    /// Read a named value, or `None` when it is absent.
    fn value(&self, field: &str) -> Option<Value>;
}

impl<T: ConfigKey + ?Sized> ConfigKey for &T {
    fn open_child(&self, name: &str) -> Option<Box<dyn ConfigKey + '_>> {
        (**self).open_child(name)
    }

    fn child_names(&self) -> Vec<String> {
        (**self).child_names()
    }

    fn value(&self, field: &str) -> Option<Value> {
        (**self).value(field)
    }
}

/// The local-machine registry hive.
pub trait ConfigTree {
    /// Open a key by its backslash-separated path below the hive root.
    ///
    /// A trailing backslash is allowed. Returns `None` when any segment of
    /// the path is missing.
    fn open(&self, path: &str) -> Option<Box<dyn ConfigKey + '_>>;
}

/// Open the registry the detection readers should use.
///
/// A snapshot file configured in [`Settings::snapshot`] takes precedence over
/// the native registry. A snapshot that fails to load is logged and replaced
/// with an empty tree so the run still completes.
pub fn local_machine(settings: &Settings) -> Box<dyn ConfigTree> {
    if let Some(path) = &settings.snapshot {
        return match SnapshotTree::load(path) {
            Ok(tree) => {
                tracing::debug!("Using registry snapshot {}", path.display());
                Box::new(tree)
            }
            Err(e) => {
                tracing::warn!("{}", e);
                Box::new(SnapshotTree::default())
            }
        };
    }

    native()
}

#[cfg(windows)]
fn native() -> Box<dyn ConfigTree> {
    Box::new(windows::LocalMachine::new())
}

#[cfg(not(windows))]
fn native() -> Box<dyn ConfigTree> {
    tracing::debug!("No native registry on this platform; registry steps will find nothing");
    Box::new(SnapshotTree::default())
}
