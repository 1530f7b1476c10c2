//! Line-by-line schema validation for JSONL files.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use serde_json::Value;

use crate::error::{DatacommonsError, Result};
use crate::model::{Schema, ValueType};

/// A single problem found while validating a file.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaIssue {
    /// The data file does not exist.
    FileNotFound { path: String },
    /// A line is not valid JSON.
    Decode { line: usize, message: String },
    /// A line parsed, but not to a JSON object.
    NotAnObject { line: usize },
    /// A declared field is absent from the record.
    MissingField { line: usize, field: String },
    /// A declared field holds a value of the wrong type.
    TypeMismatch {
        line: usize,
        field: String,
        expected: ValueType,
        actual: ValueType,
    },
}

impl SchemaIssue {
    /// 1-based line number the issue was found on, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            SchemaIssue::FileNotFound { .. } => None,
            SchemaIssue::Decode { line, .. }
            | SchemaIssue::NotAnObject { line }
            | SchemaIssue::MissingField { line, .. }
            | SchemaIssue::TypeMismatch { line, .. } => Some(*line),
        }
    }
}

impl fmt::Display for SchemaIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaIssue::FileNotFound { path } => write!(f, "File not found: {}", path),
            SchemaIssue::Decode { line, message } => {
                write!(f, "Line {}: JSON decode error - {}", line, message)
            }
            SchemaIssue::NotAnObject { line } => {
                write!(f, "Line {}: record is not a JSON object.", line)
            }
            SchemaIssue::MissingField { line, field } => {
                write!(f, "Line {}: missing required field '{}'.", line, field)
            }
            SchemaIssue::TypeMismatch {
                line,
                field,
                expected,
                actual,
            } => write!(
                f,
                "Line {}: field '{}' expected {}, got {}.",
                line, field, expected, actual
            ),
        }
    }
}

/// Check every record of a JSONL file against `schema`.
///
/// Blank lines are skipped but still count towards line numbers. Schema
/// entries whose type name is not a string, or not one of the known
/// primitive names, are ignored. A missing file is reported as an issue;
/// only other I/O failures are returned as errors.
pub fn check_schema(path: impl AsRef<Path>, schema: &Schema) -> Result<Vec<SchemaIssue>> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "data file not found");
            return Ok(vec![SchemaIssue::FileNotFound {
                path: path.display().to_string(),
            }]);
        }
        Err(e) => return Err(DatacommonsError::io(path, e)),
    };

    let declared: Vec<(&str, ValueType)> = schema
        .iter()
        .filter_map(|(field, type_name)| {
            let expected = ValueType::from_schema_name(type_name.as_str()?)?;
            Some((field.as_str(), expected))
        })
        .collect();

    let mut issues = Vec::new();
    let mut records = 0usize;

    for (index, line) in BufReader::new(file).lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|e| DatacommonsError::io(path, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        records += 1;

        let record: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                issues.push(SchemaIssue::Decode {
                    line: line_number,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let Some(record) = record.as_object() else {
            issues.push(SchemaIssue::NotAnObject { line: line_number });
            continue;
        };

        for &(field, expected) in &declared {
            match record.get(field) {
                None => issues.push(SchemaIssue::MissingField {
                    line: line_number,
                    field: field.to_string(),
                }),
                Some(value) if !expected.matches(value) => {
                    issues.push(SchemaIssue::TypeMismatch {
                        line: line_number,
                        field: field.to_string(),
                        expected,
                        actual: ValueType::of(value),
                    })
                }
                Some(_) => {}
            }
        }
    }

    tracing::debug!(
        path = %path.display(),
        records,
        issues = issues.len(),
        "schema validation finished"
    );

    Ok(issues)
}

/// Validate a JSONL file against `schema`, returning readable messages.
///
/// An empty list means every record matched.
pub fn validate_schema(path: impl AsRef<Path>, schema: &Schema) -> Result<Vec<String>> {
    Ok(check_schema(path, schema)?
        .iter()
        .map(ToString::to_string)
        .collect())
}
