//! Optional catalog snapshot shared between CLI invocations.

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use datacommons::{Catalog, DatasetMetadata, DatasetVersion, VersionManager};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// On-disk shape of a catalog snapshot.
#[derive(Debug, Default, Serialize, Deserialize)]
struct Snapshot {
    #[serde(default)]
    datasets: Vec<DatasetMetadata>,
    #[serde(default)]
    versions: IndexMap<String, Vec<DatasetVersion>>,
}

/// Catalog and version history for one CLI invocation.
///
/// Without a snapshot path everything lives in memory and is dropped when
/// the process exits.
#[derive(Default)]
pub struct Workspace {
    pub catalog: Catalog,
    pub versions: VersionManager,
    path: Option<PathBuf>,
}

impl Workspace {
    /// Load the snapshot at `path` if one exists.
    pub fn open(path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no catalog snapshot yet");
            return Ok(Self {
                path: Some(path),
                ..Self::default()
            });
        }

        let file = File::open(&path).map_err(|e| {
            format!("Failed to open catalog '{}': {}", path.display(), e)
        })?;
        let snapshot: Snapshot = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
            format!("Failed to parse catalog '{}': {}", path.display(), e)
        })?;

        tracing::debug!(
            path = %path.display(),
            datasets = snapshot.datasets.len(),
            "loaded catalog snapshot"
        );

        Ok(Self {
            catalog: snapshot.datasets.into_iter().collect(),
            versions: VersionManager::from_history(snapshot.versions),
            path: Some(path),
        })
    }

    /// Write the snapshot back, if this workspace has a path.
    pub fn save(&self) -> Result<(), Box<dyn Error>> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        create_parent(path)?;

        let snapshot = Snapshot {
            datasets: self.catalog.iter().cloned().collect(),
            versions: self.versions.history().clone(),
        };

        let file = File::create(path).map_err(|e| {
            format!("Failed to create catalog '{}': {}", path.display(), e)
        })?;
        serde_json::to_writer_pretty(BufWriter::new(file), &snapshot)
            .map_err(|e| format!("Failed to serialize catalog: {}", e))?;

        tracing::debug!(path = %path.display(), "saved catalog snapshot");
        Ok(())
    }
}

fn create_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                format!("Failed to create directory '{}': {}", parent.display(), e)
            })?;
        }
    }
    Ok(())
}
