//! Integration tests for datacommons.

use std::fs;
use std::io::Write;

use serde_json::json;
use tempfile::{NamedTempFile, TempDir};

use datacommons::{
    Catalog, DatacommonsError, DatasetFormat, DatasetMetadata, DatasetValidator, Schema,
    ValueType, VersionManager, compute_sha256, config, verify_file,
};

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

/// Helper to create a temporary file with the given suffix and content.
fn create_test_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

fn traces_metadata() -> DatasetMetadata {
    let schema: Schema = [
        ("trace_id".to_string(), json!("str")),
        ("action".to_string(), json!("str")),
        ("reward".to_string(), json!("float")),
    ]
    .into_iter()
    .collect();

    DatasetMetadata::new(
        "ds-001",
        "Agent Traces Dataset",
        "Traces collected from autonomous agent runs for benchmarking.",
        DatasetFormat::Jsonl,
        1_024_000,
        5000,
        "Apache-2.0",
    )
    .expect("valid metadata")
    .with_tags(["agents", "traces", "benchmarking"])
    .with_schema(schema)
}

const TRACES: &str = "{\"trace_id\": \"t-001\", \"action\": \"move\", \"reward\": 1.0}\n\
                      {\"trace_id\": \"t-002\", \"action\": \"stop\", \"reward\": 0.0}\n\
                      {\"trace_id\": \"t-003\", \"action\": \"jump\", \"reward\": 2.5}";

// =============================================================================
// Register + Version Workflow
// =============================================================================

#[test]
fn test_register_and_version_workflow() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("dataset.json");
    fs::write(&config_path, serde_json::to_string_pretty(&traces_metadata()).unwrap()).unwrap();

    let mut catalog = Catalog::new();
    let mut versions = VersionManager::new();

    let metadata = config::load_metadata(&config_path).expect("config loads");
    versions.create_version(&metadata.dataset_id, "Initial registration.");
    catalog.register(metadata.clone());

    assert_eq!(catalog.get("ds-001").unwrap(), &metadata);
    let history = versions.list_versions("ds-001");
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].version, "1.0.0");
    assert_eq!(history[0].changes, "Initial registration.");
}

#[test]
fn test_reregistration_replaces_every_field() {
    let mut catalog = Catalog::new();
    catalog.register(traces_metadata());

    let replacement = DatasetMetadata::new("ds-001", "Renamed", "Other", DatasetFormat::Parquet, 1, 1, "MIT")
        .unwrap()
        .with_version("3.0.0");
    catalog.register(replacement.clone());

    let stored = catalog.get("ds-001").unwrap();
    assert_eq!(stored, &replacement);
    assert!(stored.tags.is_empty());
    assert!(stored.schema.is_empty());
}

#[test]
fn test_get_unknown_reports_identifier() {
    let catalog = Catalog::new();
    match catalog.get("missing-ds") {
        Err(DatacommonsError::NotFound { dataset_id }) => assert_eq!(dataset_id, "missing-ds"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_validate_dataset_against_registered_schema() {
    let file = create_test_file(".jsonl", TRACES);
    let metadata = traces_metadata();

    let errors = DatasetValidator::new()
        .validate_schema(file.path(), &metadata.schema)
        .unwrap();
    assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
}

#[test]
fn test_validate_reports_every_problem_in_order() {
    let file = create_test_file(
        ".jsonl",
        "{\"trace_id\": \"t-1\", \"action\": \"move\", \"reward\": 1}\n\
         \n\
         {\"trace_id\": \"t-2\"}\n\
         oops\n",
    );
    let errors = DatasetValidator::new()
        .validate_schema(file.path(), &traces_metadata().schema)
        .unwrap();

    assert_eq!(errors.len(), 4);
    assert_eq!(
        &errors[..3],
        &[
            "Line 1: field 'reward' expected float, got int.".to_string(),
            "Line 3: missing required field 'action'.".to_string(),
            "Line 3: missing required field 'reward'.".to_string(),
        ]
    );
    assert!(errors[3].starts_with("Line 4: JSON decode error"));
}

#[test]
fn test_statistics_jsonl_and_csv() {
    let jsonl = create_test_file(".jsonl", TRACES);
    let report = DatasetValidator::new().compute_statistics(jsonl.path()).unwrap();
    let stats = report.statistics().expect("computed");
    assert_eq!(stats.row_count, 3);
    assert_eq!(stats.type_count("trace_id", ValueType::Str), 3);
    assert!(stats.null_counts.is_empty());

    let csv = create_test_file(".csv", "id,value\n1,a\n2,\n3,c\n");
    let report = DatasetValidator::new().compute_statistics(csv.path()).unwrap();
    let stats = report.statistics().expect("computed");
    assert_eq!(stats.row_count, 3);
    assert_eq!(stats.null_counts.get("value"), Some(&1));
}

#[test]
fn test_statistics_missing_file_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let report = DatasetValidator::new()
        .compute_statistics(dir.path().join("gone.csv"))
        .unwrap();
    assert!(report.statistics().is_none());
    assert!(report.error().unwrap().contains("gone.csv"));
}

// =============================================================================
// Digests
// =============================================================================

#[test]
fn test_identical_files_share_digest() {
    let dir = TempDir::new().unwrap();
    let a = dir.path().join("a.bin");
    let b = dir.path().join("nested").join("b.bin");
    fs::create_dir_all(b.parent().unwrap()).unwrap();
    fs::write(&a, TRACES).unwrap();
    fs::write(&b, TRACES).unwrap();

    let digest_a = compute_sha256(&a).unwrap();
    assert_eq!(digest_a, compute_sha256(&b).unwrap());
    assert_eq!(digest_a.len(), 64);
    assert!(digest_a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
}

#[test]
fn test_appended_byte_changes_digest() {
    let a = create_test_file(".bin", "payload");
    let b = create_test_file(".bin", "payload\n");
    assert_ne!(compute_sha256(a.path()).unwrap(), compute_sha256(b.path()).unwrap());
}

#[test]
fn test_empty_file_digest() {
    let file = create_test_file(".bin", "");
    assert_eq!(compute_sha256(file.path()).unwrap(), EMPTY_SHA256);
}

#[test]
fn test_verify_file() {
    let file = create_test_file(".jsonl", TRACES);
    let expected = compute_sha256(file.path()).unwrap();

    let ok = verify_file("ds-001", file.path(), &expected.to_uppercase()).unwrap();
    assert!(ok.verified);
    assert_eq!(ok.sha256, expected);
    assert_eq!(ok.path, file.path());

    let bad = verify_file("ds-001", file.path(), EMPTY_SHA256).unwrap();
    assert!(!bad.verified);
    assert_eq!(bad.sha256, expected);
}
