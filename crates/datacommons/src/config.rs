//! Loading metadata and schema documents from JSON files.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{DatacommonsError, Result};
use crate::model::{DatasetMetadata, Schema};

/// Load dataset metadata from a JSON config file.
///
/// The document must be a JSON object whose keys are the metadata fields.
/// Optional fields fall back to their defaults.
///
/// # Example
///
/// ```no_run
/// let metadata = datacommons::config::load_metadata("dataset.json").unwrap();
/// println!("{} v{}", metadata.dataset_id, metadata.version);
/// ```
pub fn load_metadata(path: impl AsRef<Path>) -> Result<DatasetMetadata> {
    let value = read_object(path.as_ref(), "Config file must contain a JSON object.")?;
    serde_json::from_value(value).map_err(|e| DatacommonsError::Validation(e.to_string()))
}

/// Load a field-name to type-name schema from a JSON file.
///
/// Key order in the document is preserved.
pub fn load_schema(path: impl AsRef<Path>) -> Result<Schema> {
    let value = read_object(path.as_ref(), "Schema must be a JSON object.")?;
    Ok(serde_json::from_value(value)?)
}

fn read_object(path: &Path, not_object: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(&read_text(path)?)?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(DatacommonsError::Config(not_object.to_string()))
    }
}

fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| DatacommonsError::io(path, e))
}
