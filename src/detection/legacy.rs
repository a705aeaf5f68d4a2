//! .NET Framework versions before 4.5.
//!
//! Older frameworks record themselves under `NDP\<version key>`, for example
//! `NDP\v3.5`. Some layouts keep the record on the version key itself; others
//! (v4.0 and the v1.1 language packs) push it one level down into per-profile
//! or per-locale children such as `NDP\v4.0\Client`.
//!
//! Each record is read from three values:
//!
//! | value     | meaning                 |
//! |-----------|-------------------------|
//! | `Version` | display version string  |
//! | `SP`      | service-pack level      |
//! | `Install` | `1` when installed      |
//!
//! `NDP\v4` is skipped; [`super::modern`] reports it.

use crate::registry::{ConfigKey, ConfigTree};

use super::types::VersionEntry;

/// Prefix shared by all version keys under `NDP`.
const VERSION_KEY_PREFIX: &str = "v";

/// The 4.5+ subtree, reported by the modern reader instead.
const MODERN_KEY_NAME: &str = "v4";

/// Install record read from one registry key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct InstallRecord {
    version: String,
    service_pack: String,
    install: String,
}

impl InstallRecord {
    fn read(key: &dyn ConfigKey) -> Self {
        Self {
            version: key
                .value("Version")
                .and_then(|v| v.as_text().map(str::to_string))
                .unwrap_or_default(),
            service_pack: key
                .value("SP")
                .map(|v| v.to_string())
                .unwrap_or_default(),
            install: key
                .value("Install")
                .map(|v| v.to_string())
                .unwrap_or_default(),
        }
    }

    /// Apply the print rule to this record.
    ///
    /// A record without an install flag stands on its own. With a flag, only
    /// `"1"` counts as installed.
    fn entry(&self) -> Option<VersionEntry> {
        if self.install.is_empty() {
            return VersionEntry::new(&self.version);
        }
        if self.install != "1" {
            return None;
        }
        VersionEntry::new(&self.version).map(|e| e.with_service_pack(&self.service_pack))
    }
}

/// Walk the legacy install tree at `root` and collect installed versions.
///
/// Returns nothing when `root` does not exist.
pub fn scan(tree: &dyn ConfigTree, root: &str) -> Vec<VersionEntry> {
    let Some(ndp) = tree.open(root) else {
        tracing::debug!("Legacy install root '{}' not found", root);
        return Vec::new();
    };

    let mut entries = Vec::new();

    for name in ndp.child_names() {
        if name == MODERN_KEY_NAME {
            tracing::debug!("Skipping '{}'; reported by the 4.5+ reader", name);
            continue;
        }
        if !name.starts_with(VERSION_KEY_PREFIX) {
            continue;
        }

        let Some(version_key) = ndp.open_child(&name) else {
            continue;
        };

        let record = InstallRecord::read(&*version_key);
        entries.extend(record.entry());

        if !record.version.is_empty() {
            continue;
        }

        // No record on the version key itself; it lives one level down.
        for child_name in version_key.child_names() {
            if let Some(child) = version_key.open_child(&child_name) {
                entries.extend(InstallRecord::read(&*child).entry());
            }
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LEGACY_ROOT;
    use crate::registry::SnapshotTree;

    /// Build a tree whose `NDP` key has the given children (YAML flow mapping).
    fn ndp(children: &str) -> SnapshotTree {
        let yaml = format!(
            "SOFTWARE:\n  keys:\n    Microsoft:\n      keys:\n        NET Framework Setup:\n          keys:\n            NDP:\n              keys: {}\n",
            children
        );
        SnapshotTree::from_yaml_str(&yaml).unwrap()
    }

    fn rendered(tree: &SnapshotTree) -> Vec<String> {
        scan(tree, LEGACY_ROOT)
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn missing_root_yields_nothing() {
        let tree = SnapshotTree::default();
        assert!(scan(&tree, LEGACY_ROOT).is_empty());
    }

    #[test]
    fn record_without_install_flag_prints_bare_version() {
        let tree = ndp(r#"{ v1.1.4322: { values: { Version: "1.1.4322" } } }"#);
        assert_eq!(rendered(&tree), vec!["1.1.4322"]);
    }

    #[test]
    fn installed_record_with_service_pack_is_annotated() {
        let tree = ndp(r#"{ v2.0.50727: { values: { Version: "2.0.50727.4927", SP: 2, Install: 1 } } }"#);
        assert_eq!(rendered(&tree), vec!["2.0.50727.4927 Service Pack 2"]);
    }

    #[test]
    fn installed_record_without_service_pack_is_bare() {
        let tree = ndp(r#"{ v3.0: { values: { Version: "3.0.30729", Install: 1 } } }"#);
        assert_eq!(rendered(&tree), vec!["3.0.30729"]);
    }

    #[test]
    fn record_not_installed_prints_nothing() {
        let tree = ndp(r#"{ v3.5: { values: { Version: "3.5.30729.4926", SP: 1, Install: 0 } } }"#);
        assert!(rendered(&tree).is_empty());
    }

    #[test]
    fn install_flag_compares_textually() {
        let tree = ndp(r#"{ v3.5: { values: { Version: "3.5.30729.4926", SP: "1", Install: "1" } } }"#);
        assert_eq!(rendered(&tree), vec!["3.5.30729.4926 Service Pack 1"]);
    }

    #[test]
    fn modern_subtree_is_never_traversed() {
        let tree = ndp(
            r#"{ v4: { values: { Version: "4.8.03761", Install: 1 }, keys: { Full: { values: { Version: "4.8.03761", Install: 1 } } } } }"#,
        );
        assert!(rendered(&tree).is_empty());
    }

    #[test]
    fn keys_without_version_prefix_are_ignored() {
        let tree = ndp(r#"{ CDF: { values: { Version: "4.0" } }, "1033": { values: { Version: "9.9" } } }"#);
        assert!(rendered(&tree).is_empty());
    }

    #[test]
    fn record_in_child_keys_is_found() {
        let tree = ndp(
            r#"{ v4.0: { keys: { Client: { values: { Version: "4.0.0.0", Install: 1 } }, Full: { values: { Version: "4.0.30319", Install: 0 } } } } }"#,
        );
        assert_eq!(rendered(&tree), vec!["4.0.0.0"]);
    }

    #[test]
    fn child_keys_apply_service_pack_rule() {
        let tree = ndp(
            r#"{ v1.1.4322: { keys: { "1033": { values: { Version: "1.1.4322", SP: 1, Install: 1 } } } } }"#,
        );
        assert_eq!(rendered(&tree), vec!["1.1.4322 Service Pack 1"]);
    }

    #[test]
    fn children_skipped_when_parent_has_version() {
        let tree = ndp(
            r#"{ v3.5: { values: { Version: "3.5.30729.4926", SP: 1, Install: 1 }, keys: { "1033": { values: { Version: "3.5.30729.4926", SP: 1, Install: 1 } } } } }"#,
        );
        assert_eq!(rendered(&tree), vec!["3.5.30729.4926 Service Pack 1"]);
    }

    #[test]
    fn descent_stops_after_one_level() {
        let tree = ndp(
            r#"{ v4.0: { keys: { Client: { keys: { Deep: { values: { Version: "9.9.9" } } } } } } }"#,
        );
        assert!(rendered(&tree).is_empty());
    }

    #[test]
    fn blank_version_is_not_printed() {
        let tree = ndp(r#"{ v2.0: { values: { Version: "   " } } }"#);
        assert!(rendered(&tree).is_empty());
    }

    #[test]
    fn numeric_version_value_is_ignored() {
        let tree = ndp(r#"{ v2.0: { values: { Version: 2 } } }"#);
        assert!(rendered(&tree).is_empty());
    }

    #[test]
    fn typical_machine_reports_in_key_order() {
        let tree = ndp(
            r#"{
                CDF: { keys: { v4.0: { values: { Install: 1 } } } },
                v2.0.50727: { values: { Version: "2.0.50727.4927", SP: 2, Install: 1 } },
                v3.0: { values: { Version: "3.0.30729.4926", SP: 2, Install: 1 } },
                v3.5: { values: { Version: "3.5.30729.4926", SP: 1, Install: 1 } },
                v4: { keys: { Full: { values: { Version: "4.8.03761", Release: 528040, Install: 1 } } } },
                v4.0: { keys: { Client: { values: { Version: "4.0.0.0", Install: 1 } } } }
                }"#,
        );
        assert_eq!(
            rendered(&tree),
            vec![
                "2.0.50727.4927 Service Pack 2",
                "3.0.30729.4926 Service Pack 2",
                "3.5.30729.4926 Service Pack 1",
                "4.0.0.0",
            ]
        );
    }
}
