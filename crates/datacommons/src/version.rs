//! Per-dataset version history.

use indexmap::IndexMap;

use crate::model::{DEFAULT_VERSION, DatasetVersion};

/// Version produced when the previous version string cannot be bumped.
pub const FALLBACK_VERSION: &str = "1.1.0";

/// Append-only version history for each dataset.
#[derive(Debug, Clone, Default)]
pub struct VersionManager {
    versions: IndexMap<String, Vec<DatasetVersion>>,
}

impl VersionManager {
    /// Create a manager with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a manager from previously captured history.
    pub fn from_history(versions: IndexMap<String, Vec<DatasetVersion>>) -> Self {
        Self { versions }
    }

    /// The full history, keyed by dataset identifier.
    pub fn history(&self) -> &IndexMap<String, Vec<DatasetVersion>> {
        &self.versions
    }

    /// Append a new version entry for `dataset_id`.
    ///
    /// The first entry is `1.0.0`; every later entry is a minor bump of the
    /// previous one (see [`next_version`]).
    pub fn create_version(&mut self, dataset_id: &str, changes: impl Into<String>) -> DatasetVersion {
        let history = self.versions.entry(dataset_id.to_string()).or_default();
        let version = next_version(history.last().map(|v| v.version.as_str()));
        let entry = DatasetVersion::new(version, changes);

        tracing::debug!(dataset_id, version = %entry.version, "created version");
        history.push(entry.clone());
        entry
    }

    /// All version entries for a dataset, oldest first.
    ///
    /// Unknown identifiers yield an empty list. The returned list is a copy.
    pub fn list_versions(&self, dataset_id: &str) -> Vec<DatasetVersion> {
        self.versions.get(dataset_id).cloned().unwrap_or_default()
    }

    /// The most recent entry for a dataset.
    pub fn latest(&self, dataset_id: &str) -> Option<&DatasetVersion> {
        self.versions.get(dataset_id).and_then(|history| history.last())
    }
}

/// Compute the version following `previous`.
///
/// Increments the second dot-separated component and zeroes the rest:
/// `1.0.0` becomes `1.1.0`, `2.5.3` becomes `2.6.0`. Strings without a
/// numeric second component become [`FALLBACK_VERSION`] whatever their
/// major component was. No previous version yields `1.0.0`.
pub fn next_version(previous: Option<&str>) -> String {
    let Some(previous) = previous else {
        return DEFAULT_VERSION.to_string();
    };

    let mut parts = previous.split('.');
    let major = parts.next().unwrap_or_default();
    let minor = parts
        .next()
        .and_then(|minor| minor.parse::<i64>().ok())
        .and_then(|minor| minor.checked_add(1));

    match minor {
        Some(minor) => format!("{}.{}.0", major, minor),
        None => FALLBACK_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_version() {
        let mut manager = VersionManager::new();
        let entry = manager.create_version("ds-001", "Initial release.");
        assert_eq!(entry.version, "1.0.0");
        assert_eq!(entry.changes, "Initial release.");
    }

    #[test]
    fn test_minor_bumps() {
        let mut manager = VersionManager::new();
        manager.create_version("ds-001", "v1");
        assert_eq!(manager.create_version("ds-001", "v2").version, "1.1.0");
        assert_eq!(manager.create_version("ds-001", "v3").version, "1.2.0");
    }

    #[test]
    fn test_datasets_are_independent() {
        let mut manager = VersionManager::new();
        manager.create_version("ds-001", "a");
        manager.create_version("ds-001", "b");
        assert_eq!(manager.create_version("ds-002", "c").version, "1.0.0");
        assert_eq!(manager.latest("ds-001").unwrap().version, "1.1.0");
    }

    #[test]
    fn test_list_versions_unknown_is_empty() {
        let manager = VersionManager::new();
        assert!(manager.list_versions("ds-001").is_empty());
        assert!(manager.latest("ds-001").is_none());
    }

    #[test]
    fn test_list_versions_is_a_copy() {
        let mut manager = VersionManager::new();
        manager.create_version("ds-001", "v1");

        let mut copy = manager.list_versions("ds-001");
        copy.clear();
        copy.push(DatasetVersion::new("9.9.9", "tampered"));

        let versions = manager.list_versions("ds-001");
        assert_eq!(versions.len(), 1);
        assert_eq!(versions[0].version, "1.0.0");
    }

    #[test]
    fn test_next_version() {
        assert_eq!(next_version(None), "1.0.0");
        assert_eq!(next_version(Some("1.0.0")), "1.1.0");
        assert_eq!(next_version(Some("2.5.3")), "2.6.0");
        assert_eq!(next_version(Some("3.4")), "3.5.0");
        assert_eq!(next_version(Some("1.2.3.4")), "1.3.0");
    }

    #[test]
    fn test_next_version_fallback() {
        assert_eq!(next_version(Some("7")), FALLBACK_VERSION);
        assert_eq!(next_version(Some("7.x.0")), FALLBACK_VERSION);
        assert_eq!(next_version(Some("")), FALLBACK_VERSION);
        assert_eq!(next_version(Some("v2.beta")), FALLBACK_VERSION);
    }

    #[test]
    fn test_restored_history_continues() {
        let mut versions = IndexMap::new();
        versions.insert("ds-001".to_string(), vec![DatasetVersion::new("4.2.0", "old")]);
        let mut manager = VersionManager::from_history(versions);
        assert_eq!(manager.create_version("ds-001", "new").version, "4.3.0");
    }
}
