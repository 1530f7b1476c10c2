//! Core type definitions shared by the catalog and the validators.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DatacommonsError;

/// File format of a registered dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// One JSON object per line.
    Jsonl,
    /// Comma-separated values with a header row.
    Csv,
    /// Apache Parquet columnar files.
    Parquet,
    /// Apache Arrow IPC files.
    Arrow,
}

impl DatasetFormat {
    /// All supported formats, in declaration order.
    pub const ALL: [DatasetFormat; 4] = [
        DatasetFormat::Jsonl,
        DatasetFormat::Csv,
        DatasetFormat::Parquet,
        DatasetFormat::Arrow,
    ];

    /// The canonical lowercase name used in JSON and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetFormat::Jsonl => "jsonl",
            DatasetFormat::Csv => "csv",
            DatasetFormat::Parquet => "parquet",
            DatasetFormat::Arrow => "arrow",
        }
    }
}

impl FromStr for DatasetFormat {
    type Err = DatacommonsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(DatasetFormat::Jsonl),
            "csv" => Ok(DatasetFormat::Csv),
            "parquet" => Ok(DatasetFormat::Parquet),
            "arrow" => Ok(DatasetFormat::Arrow),
            _ => Err(DatacommonsError::Validation(format!(
                "Unknown format: {}. Use jsonl, csv, parquet, or arrow.",
                s
            ))),
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Primitive runtime type of a JSON value.
///
/// The names double as the type vocabulary of a [`Schema`](super::Schema):
/// every variant except [`ValueType::Null`] may be declared for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Text values.
    Str,
    /// Whole numbers of any magnitude.
    Int,
    /// Non-integral numbers.
    Float,
    /// `true` / `false`.
    Bool,
    /// JSON arrays.
    List,
    /// JSON objects.
    Dict,
    /// JSON `null`. Observed only, never declared.
    Null,
}

impl ValueType {
    /// Look up a declared schema type name.
    ///
    /// Returns `None` for names outside the vocabulary, including `"null"`.
    pub fn from_schema_name(name: &str) -> Option<Self> {
        match name {
            "str" => Some(ValueType::Str),
            "int" => Some(ValueType::Int),
            "float" => Some(ValueType::Float),
            "bool" => Some(ValueType::Bool),
            "list" => Some(ValueType::List),
            "dict" => Some(ValueType::Dict),
            _ => None,
        }
    }

    /// Classify a JSON value.
    ///
    /// A number is a float only when its literal has a fraction or an
    /// exponent; integers wider than 64 bits stay `Int`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Number(n) if n.is_i64() || n.is_u64() => ValueType::Int,
            Value::Number(n) if n.to_string().contains(['.', 'e', 'E']) => ValueType::Float,
            Value::Number(_) => ValueType::Int,
            Value::String(_) => ValueType::Str,
            Value::Array(_) => ValueType::List,
            Value::Object(_) => ValueType::Dict,
        }
    }

    /// Returns true if `value` satisfies a field declared with this type.
    ///
    /// Booleans also satisfy `Int`; integers never satisfy `Float`.
    pub fn matches(&self, value: &Value) -> bool {
        let actual = ValueType::of(value);
        actual == *self || (*self == ValueType::Int && actual == ValueType::Bool)
    }

    /// The type name as it appears in schemas and histograms.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Str => "str",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Bool => "bool",
            ValueType::List => "list",
            ValueType::Dict => "dict",
            ValueType::Null => "null",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_from_str_is_case_insensitive() {
        assert_eq!("JSONL".parse::<DatasetFormat>().unwrap(), DatasetFormat::Jsonl);
        assert_eq!("Parquet".parse::<DatasetFormat>().unwrap(), DatasetFormat::Parquet);
        assert!("xlsx".parse::<DatasetFormat>().is_err());
    }

    #[test]
    fn test_format_serializes_lowercase() {
        for format in DatasetFormat::ALL {
            let encoded = serde_json::to_string(&format).unwrap();
            assert_eq!(encoded, format!("\"{}\"", format));
        }
    }

    #[test]
    fn test_value_type_of() {
        assert_eq!(ValueType::of(&json!("a")), ValueType::Str);
        assert_eq!(ValueType::of(&json!(3)), ValueType::Int);
        assert_eq!(ValueType::of(&json!(-3)), ValueType::Int);
        assert_eq!(ValueType::of(&json!(3.5)), ValueType::Float);
        assert_eq!(ValueType::of(&json!(true)), ValueType::Bool);
        assert_eq!(ValueType::of(&json!([1])), ValueType::List);
        assert_eq!(ValueType::of(&json!({"a": 1})), ValueType::Dict);
        assert_eq!(ValueType::of(&Value::Null), ValueType::Null);
    }

    #[test]
    fn test_bool_satisfies_int() {
        assert!(ValueType::Int.matches(&json!(true)));
        assert!(ValueType::Int.matches(&json!(false)));
        assert!(ValueType::Bool.matches(&json!(true)));
        assert!(!ValueType::Bool.matches(&json!(1)));
        assert!(!ValueType::Float.matches(&json!(true)));
        assert!(!ValueType::Float.matches(&json!(1)));
        assert_eq!(ValueType::of(&json!(true)), ValueType::Bool);
    }

    #[test]
    fn test_wide_integers_are_int() {
        let wide: Value = serde_json::from_str("100000000000000000000").unwrap();
        let negative: Value = serde_json::from_str("-100000000000000000000").unwrap();
        let exponent: Value = serde_json::from_str("1e20").unwrap();
        let fraction: Value = serde_json::from_str("2.0").unwrap();

        assert_eq!(ValueType::of(&wide), ValueType::Int);
        assert_eq!(ValueType::of(&negative), ValueType::Int);
        assert!(ValueType::Int.matches(&wide));
        assert_eq!(ValueType::of(&exponent), ValueType::Float);
        assert_eq!(ValueType::of(&fraction), ValueType::Float);
    }

    #[test]
    fn test_schema_names() {
        assert_eq!(ValueType::from_schema_name("dict"), Some(ValueType::Dict));
        assert_eq!(ValueType::from_schema_name("null"), None);
        assert_eq!(ValueType::from_schema_name("custom_type"), None);
    }
}
