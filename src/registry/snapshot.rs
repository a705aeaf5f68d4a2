//! YAML registry snapshots.
//!
//! A snapshot mirrors the registry layout below `HKEY_LOCAL_MACHINE`. The
//! document root maps top-level key names to nodes; each node carries its
//! named `values` and its child `keys`:
//!
//! ```yaml
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
//! ```
//!
//! Key names match case-insensitively, like the native registry.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{ConfigKey, ConfigTree, Value};
use crate::error::{DetectError, Result};

/// A single key in a snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SnapshotNode {
    /// Named values stored directly on this key.
    #[serde(default)]
    pub values: BTreeMap<String, Value>,

    /// Child keys, enumerated in sorted order.
    #[serde(default)]
    pub keys: BTreeMap<String, SnapshotNode>,
}

impl SnapshotNode {
    fn child(&self, name: &str) -> Option<&SnapshotNode> {
        self.keys
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, node)| node)
    }
}

impl ConfigKey for SnapshotNode {
    fn open_child(&self, name: &str) -> Option<Box<dyn ConfigKey + '_>> {
        self.child(name)
            .map(|node| Box::new(node) as Box<dyn ConfigKey + '_>)
    }

    fn child_names(&self) -> Vec<String> {
        self.keys.keys().cloned().collect()
    }

    fn value(&self, field: &str) -> Option<Value> {
        self.values
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(field))
            .map(|(_, value)| value.clone())
    }
}

/// A registry hive loaded from a YAML snapshot.
///
/// The default value is an empty hive in which every path is absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotTree {
    root: SnapshotNode,
}

impl SnapshotTree {
    /// Load a snapshot from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DetectError::SnapshotRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_yaml_str(&content).map_err(|e| DetectError::SnapshotParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Parse a snapshot from YAML text.
    ///
    /// An empty document yields an empty hive.
    pub fn from_yaml_str(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let keys: BTreeMap<String, SnapshotNode> = serde_yaml::from_str(content)?;
        Ok(Self {
            root: SnapshotNode {
                values: BTreeMap::new(),
                keys,
            },
        })
    }
}

impl ConfigTree for SnapshotTree {
    fn open(&self, path: &str) -> Option<Box<dyn ConfigKey + '_>> {
        let mut node = &self.root;
        for segment in path.split('\\').filter(|s| !s.is_empty()) {
            node = node.child(segment)?;
        }
        Some(Box::new(node) as Box<dyn ConfigKey + '_>)
    }
}
