//! Download verification result.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Outcome of checking a downloaded file against its expected digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadResult {
    /// ID of the downloaded dataset.
    pub dataset_id: String,
    /// Local filesystem path to the downloaded file.
    pub path: PathBuf,
    /// Whether the file passed integrity verification.
    pub verified: bool,
    /// SHA-256 hex digest of the file as downloaded.
    pub sha256: String,
}
