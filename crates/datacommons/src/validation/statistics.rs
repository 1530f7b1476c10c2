//! Single-pass statistics over JSONL and CSV files.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DatacommonsError, Result};
use crate::model::ValueType;

/// One parsed row: field name to value, in file order.
pub type Row = IndexMap<String, Value>;

/// Row count, null counts and per-field type histograms.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStatistics {
    /// Number of rows that parsed.
    pub row_count: usize,
    /// Null or empty-string occurrences per field. Fields without any are
    /// absent.
    pub null_counts: IndexMap<String, usize>,
    /// Observed value types per field. JSON `null` is counted under the
    /// type name `null`.
    pub type_distribution: IndexMap<String, IndexMap<ValueType, usize>>,
}

impl DatasetStatistics {
    /// Fold one row into the running totals.
    pub fn observe(&mut self, row: &Row) {
        self.row_count += 1;

        for (field, value) in row {
            if is_null(value) {
                *self.null_counts.entry(field.clone()).or_default() += 1;
            }
            *self
                .type_distribution
                .entry(field.clone())
                .or_default()
                .entry(ValueType::of(value))
                .or_default() += 1;
        }
    }

    /// Null count for `field`, zero when never null.
    pub fn null_count(&self, field: &str) -> usize {
        self.null_counts.get(field).copied().unwrap_or(0)
    }

    /// How often `field` held a value of `value_type`.
    pub fn type_count(&self, field: &str, value_type: ValueType) -> usize {
        self.type_distribution
            .get(field)
            .and_then(|types| types.get(&value_type))
            .copied()
            .unwrap_or(0)
    }
}

/// Outcome of [`compute_statistics`].
///
/// A missing file is not an error: it produces the `Error` shape, which
/// serializes to `{"error": "..."}` instead of the three statistics fields.
/// Histogram type names are those of [`ValueType`]; JSON `null` values are
/// reported under `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatisticsReport {
    /// Statistics were computed.
    Computed(DatasetStatistics),
    /// The file could not be found.
    Error { error: String },
}

impl StatisticsReport {
    /// The computed statistics, if any.
    pub fn statistics(&self) -> Option<&DatasetStatistics> {
        match self {
            StatisticsReport::Computed(stats) => Some(stats),
            StatisticsReport::Error { .. } => None,
        }
    }

    /// The error message, if the file was missing.
    pub fn error(&self) -> Option<&str> {
        match self {
            StatisticsReport::Computed(_) => None,
            StatisticsReport::Error { error } => Some(error),
        }
    }
}

/// Compute statistics for a JSONL or CSV file.
///
/// Files ending in `.csv` (any case) are read as CSV with a header row and
/// every cell kept as a string. Rows shorter than the header record the
/// missing cells as null; cells beyond the header are ignored. Anything else
/// is read as JSONL; lines that do not parse to a JSON object are skipped.
pub fn compute_statistics(path: impl AsRef<Path>) -> Result<StatisticsReport> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "data file not found");
            return Ok(StatisticsReport::Error {
                error: format!("File not found: {}", path.display()),
            });
        }
        Err(e) => return Err(DatacommonsError::io(path, e)),
    };

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let stats = if is_csv {
        csv_statistics(path, file)?
    } else {
        jsonl_statistics(path, file)?
    };

    tracing::debug!(
        path = %path.display(),
        rows = stats.row_count,
        fields = stats.type_distribution.len(),
        "statistics computed"
    );

    Ok(StatisticsReport::Computed(stats))
}

fn jsonl_statistics(path: &Path, file: File) -> Result<DatasetStatistics> {
    let mut stats = DatasetStatistics::default();

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| DatacommonsError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Row>(line) {
            Ok(row) => stats.observe(&row),
            Err(e) => tracing::trace!(line = index + 1, error = %e, "skipping unparseable line"),
        }
    }

    Ok(stats)
}

fn csv_statistics(path: &Path, file: File) -> Result<DatasetStatistics> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers = reader.headers().map_err(|e| csv_error(path, e))?.clone();
    let mut stats = DatasetStatistics::default();

    for (index, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(csv_error(path, e)),
            Err(e) => {
                tracing::trace!(row = index + 1, error = %e, "skipping unreadable row");
                continue;
            }
        };

        // Short rows record their missing cells as null; extra cells are dropped.
        let row: Row = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let value = record
                    .get(i)
                    .map_or(Value::Null, |cell| Value::String(cell.to_string()));
                (header.to_string(), value)
            })
            .collect();
        stats.observe(&row);
    }

    Ok(stats)
}

fn csv_error(path: &Path, error: csv::Error) -> DatacommonsError {
    if error.is_io_error() {
        DatacommonsError::io(path, error.into())
    } else {
        DatacommonsError::Csv(error)
    }
}

fn is_null(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
