//! Dataset metadata and version entries.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DatacommonsError, Result};

use super::types::DatasetFormat;

/// Field name to declared type name, in declaration order.
///
/// Values are expected to be type-name strings (`"str"`, `"int"`, ...);
/// anything else is carried along but ignored by validation.
pub type Schema = IndexMap<String, Value>;

/// Version assigned to metadata that does not declare one.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Metadata describing a registered dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMetadata")]
pub struct DatasetMetadata {
    /// Unique identifier for the dataset.
    pub dataset_id: String,
    /// Human-readable name.
    pub name: String,
    /// Detailed description of the dataset.
    pub description: String,
    /// File format of the dataset.
    pub format: DatasetFormat,
    /// Size of the dataset in bytes.
    pub size_bytes: u64,
    /// Number of records in the dataset.
    pub num_records: u64,
    /// Field type map for the dataset.
    pub schema: Schema,
    /// SPDX license identifier or name.
    pub license: String,
    /// Free-form search tags.
    pub tags: Vec<String>,
    /// Semantic version string.
    pub version: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl DatasetMetadata {
    /// Create metadata with default schema, tags, version and timestamp.
    ///
    /// Fails with [`DatacommonsError::Validation`] if `size_bytes` or
    /// `num_records` is negative.
    pub fn new(
        dataset_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        format: DatasetFormat,
        size_bytes: i64,
        num_records: i64,
        license: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            dataset_id: dataset_id.into(),
            name: name.into(),
            description: description.into(),
            format,
            size_bytes: non_negative("size_bytes", size_bytes)?,
            num_records: non_negative("num_records", num_records)?,
            schema: Schema::new(),
            license: license.into(),
            tags: Vec::new(),
            version: DEFAULT_VERSION.to_string(),
            created_at: Utc::now(),
        })
    }

    /// Set the field type map.
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = schema;
        self
    }

    /// Set the search tags.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Set the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Override the creation timestamp.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Returns true if the dataset carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

fn non_negative(field: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        DatacommonsError::Validation(format!(
            "{} must be greater than or equal to 0, got {}",
            field, value
        ))
    })
}

/// Wire shape accepted when deserializing; funnels through the same checks
/// as [`DatasetMetadata::new`].
#[derive(Deserialize)]
struct RawMetadata {
    dataset_id: String,
    name: String,
    description: String,
    format: DatasetFormat,
    size_bytes: i64,
    num_records: i64,
    #[serde(default)]
    schema: Schema,
    license: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default = "default_version")]
    version: String,
    #[serde(default = "Utc::now", deserialize_with = "timestamp::deserialize")]
    created_at: DateTime<Utc>,
}

fn default_version() -> String {
    DEFAULT_VERSION.to_string()
}

impl TryFrom<RawMetadata> for DatasetMetadata {
    type Error = String;

    fn try_from(raw: RawMetadata) -> std::result::Result<Self, String> {
        let metadata = DatasetMetadata::new(
            raw.dataset_id,
            raw.name,
            raw.description,
            raw.format,
            raw.size_bytes,
            raw.num_records,
            raw.license,
        )
        .map_err(|e| match e {
            DatacommonsError::Validation(message) => message,
            other => other.to_string(),
        })?;

        Ok(metadata
            .with_schema(raw.schema)
            .with_tags(raw.tags)
            .with_version(raw.version)
            .with_created_at(raw.created_at))
    }
}

/// A single entry in a dataset's version history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetVersion {
    /// Version string, e.g. `1.2.0`.
    pub version: String,
    /// Human-readable change description.
    pub changes: String,
    /// When the version was created.
    #[serde(deserialize_with = "timestamp::deserialize")]
    pub created_at: DateTime<Utc>,
}

impl DatasetVersion {
    /// Create a version entry stamped with the current UTC time.
    pub fn new(version: impl Into<String>, changes: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            changes: changes.into(),
            created_at: Utc::now(),
        }
    }
}

/// Timestamps are read as RFC 3339, or as naive ISO-8601 date-times
/// (`2024-01-15T10:30:00.123456`) which are taken to be UTC.
mod timestamp {
    use chrono::{DateTime, NaiveDateTime, Utc};
    use serde::{Deserialize, Deserializer, de};

    const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

    pub fn parse(text: &str) -> Option<DateTime<Utc>> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
            return Some(parsed.with_timezone(&Utc));
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(|naive| naive.and_utc())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        parse(&text).ok_or_else(|| de::Error::custom(format!("invalid timestamp '{}'", text)))
    }
}
