//! .NET Framework 4.5 and later.
//!
//! Every 4.x release from 4.5 on updates the same key, `NDP\v4\Full`. It
//! either names its version directly or only stores a `Release` code, which
//! is translated through [`super::releases`].

use crate::registry::ConfigTree;

use super::releases::version_for_release;
use super::types::VersionEntry;

/// Read the 4.5+ install record at `key_path`.
///
/// Returns `None` when the key is absent, carries neither value, or carries a
/// release code this build does not know.
pub fn scan(tree: &dyn ConfigTree, key_path: &str) -> Option<VersionEntry> {
    let Some(key) = tree.open(key_path) else {
        tracing::debug!("4.5+ install key '{}' not found", key_path);
        return None;
    };

    if let Some(version) = key.value("Version") {
        return VersionEntry::new(&version.to_string());
    }

    let release = key.value("Release")?;
    let Some(code) = release.as_number() else {
        tracing::debug!("Ignoring non-numeric release value '{}'", release);
        return None;
    };

    match version_for_release(code) {
        Some(version) => VersionEntry::new(version),
        None => {
            tracing::debug!("Unknown release code {}", code);
            None
        }
    }
}
