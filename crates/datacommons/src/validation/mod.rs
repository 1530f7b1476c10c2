//! Schema validation and statistics for row-oriented data files.

mod schema;
mod statistics;

use std::path::Path;

use crate::error::Result;
use crate::model::Schema;

pub use schema::{SchemaIssue, check_schema, validate_schema};
pub use statistics::{DatasetStatistics, Row, StatisticsReport, compute_statistics};

/// Validates dataset files against declared schemas and computes statistics.
///
/// Data problems never surface as errors: validation returns a list of
/// messages and statistics return a report. Only unexpected I/O failures
/// are returned as `Err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DatasetValidator;

impl DatasetValidator {
    /// Create a validator.
    pub fn new() -> Self {
        Self
    }

    /// See [`validate_schema`].
    pub fn validate_schema(&self, path: impl AsRef<Path>, schema: &Schema) -> Result<Vec<String>> {
        validate_schema(path, schema)
    }

    /// See [`compute_statistics`].
    pub fn compute_statistics(&self, path: impl AsRef<Path>) -> Result<StatisticsReport> {
        compute_statistics(path)
    }
}
