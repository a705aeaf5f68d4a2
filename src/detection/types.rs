//! Detected version records.

use std::fmt;

/// One installed version found in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionEntry {
    /// Display version, already trimmed.
    pub version: String,

    /// Service-pack level, when the record carries one.
    pub service_pack: Option<String>,
}

impl VersionEntry {
    /// Create an entry for a bare version.
    ///
    /// Returns `None` when the version is empty after trimming.
    pub fn new(version: &str) -> Option<Self> {
        let version = version.trim();
        if version.is_empty() {
            return None;
        }

        Some(Self {
            version: version.to_string(),
            service_pack: None,
        })
    }

    /// Attach a service-pack level. Empty levels are ignored.
    pub fn with_service_pack(mut self, level: &str) -> Self {
        if !level.is_empty() {
            self.service_pack = Some(level.to_string());
        }
        self
    }
}

impl fmt::Display for VersionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.service_pack {
            Some(level) => write!(f, "{} Service Pack {}", self.version, level),
            None => f.write_str(&self.version),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_version_renders_without_annotation() {
        let entry = VersionEntry::new("2.0.50727.4927").unwrap();
        assert_eq!(entry.to_string(), "2.0.50727.4927");
    }

    #[test]
    fn service_pack_renders_suffix() {
        let entry = VersionEntry::new("3.5.30729.4926")
            .unwrap()
            .with_service_pack("1");
        assert_eq!(entry.to_string(), "3.5.30729.4926 Service Pack 1");
    }

    #[test]
    fn version_is_trimmed() {
        let entry = VersionEntry::new("  4.0.0.0 \n").unwrap();
        assert_eq!(entry.version, "4.0.0.0");
    }

    #[test]
    fn blank_version_is_rejected() {
        assert!(VersionEntry::new("").is_none());
        assert!(VersionEntry::new("   ").is_none());
    }

    #[test]
    fn empty_service_pack_is_ignored() {
        let entry = VersionEntry::new("3.0").unwrap().with_service_pack("");
        assert_eq!(entry.service_pack, None);
        assert_eq!(entry.to_string(), "3.0");
    }
}
