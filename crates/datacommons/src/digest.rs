//! Streaming SHA-256 digests for file integrity checks.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::error::{DatacommonsError, Result};
use crate::model::DownloadResult;

/// Default read size when streaming a file through the hasher.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024;

/// Digest configuration.
#[derive(Debug, Clone)]
pub struct DigestConfig {
    /// Bytes read per chunk.
    pub chunk_size: usize,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Computes SHA-256 digests of files without loading them into memory.
pub struct Sha256Digester {
    config: DigestConfig,
}

impl Sha256Digester {
    /// Create a digester with the default chunk size.
    pub fn new() -> Self {
        Self::with_config(DigestConfig::default())
    }

    /// Create a digester with custom configuration.
    pub fn with_config(config: DigestConfig) -> Self {
        Self { config }
    }

    /// Hash the file at `path`, returning the lowercase hex digest.
    pub fn digest_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| DatacommonsError::io(path, e))?;
        self.digest_reader(file)
            .map_err(|e| DatacommonsError::io(path, e))
    }

    /// Hash everything `reader` yields.
    pub fn digest_reader(&self, mut reader: impl Read) -> std::io::Result<String> {
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; self.config.chunk_size.max(1)];

        loop {
            let read = match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            hasher.update(&buffer[..read]);
        }

        Ok(format!("{:x}", hasher.finalize()))
    }
}

impl Default for Sha256Digester {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the SHA-256 hex digest of a file.
///
/// # Example
///
/// ```no_run
/// let digest = datacommons::compute_sha256("data/traces.jsonl").unwrap();
/// assert_eq!(digest.len(), 64);
/// ```
pub fn compute_sha256(path: impl AsRef<Path>) -> Result<String> {
    Sha256Digester::new().digest_file(path)
}

/// Hash a downloaded file and compare it with the digest the publisher
/// advertised. Hex case is ignored in the comparison.
pub fn verify_file(
    dataset_id: impl Into<String>,
    path: impl AsRef<Path>,
    expected_sha256: &str,
) -> Result<DownloadResult> {
    let path = path.as_ref();
    let sha256 = compute_sha256(path)?;
    let verified = sha256.eq_ignore_ascii_case(expected_sha256.trim());

    if !verified {
        tracing::warn!(
            path = %path.display(),
            expected = expected_sha256,
            actual = %sha256,
            "digest mismatch"
        );
    }

    Ok(DownloadResult {
        dataset_id: dataset_id.into(),
        path: path.to_path_buf(),
        verified,
        sha256,
    })
}
