//! Tour of the catalog, validator, version manager and digests.
//!
//! ```bash
//! cargo run -p datacommons --example quickstart
//! ```

use std::fs;

use serde_json::json;

use datacommons::{
    Catalog, DatasetFormat, DatasetMetadata, DatasetValidator, Schema, VersionManager,
    compute_sha256, verify_file,
};

fn main() -> datacommons::Result<()> {
    let mut catalog = Catalog::new();
    catalog.register(
        DatasetMetadata::new(
            "agent-traces-001",
            "Agent Execution Traces",
            "ReAct-style agent traces for tool-use fine-tuning.",
            DatasetFormat::Jsonl,
            1_048_576,
            5_000,
            "CC-BY-4.0",
        )?
        .with_tags(["agents", "tool-use", "fine-tuning"]),
    );
    catalog.register(
        DatasetMetadata::new(
            "instruction-csv-001",
            "Instruction Following CSV",
            "Instruction-output pairs in CSV format for SFT experiments.",
            DatasetFormat::Csv,
            512_000,
            10_000,
            "MIT",
        )?
        .with_tags(["instruction", "sft", "fine-tuning"]),
    );

    println!("== Search");
    let fine_tuning = vec!["fine-tuning".to_string()];
    for metadata in catalog.search("", None, Some(fine_tuning.as_slice())) {
        println!("  [{}] {} ({})", metadata.dataset_id, metadata.name, metadata.format);
    }
    if let Err(e) = catalog.get("missing-dataset") {
        println!("  {}", e);
    }

    let dir = tempfile::tempdir().map_err(|e| datacommons::DatacommonsError::Io {
        path: std::env::temp_dir(),
        source: e,
    })?;
    let data_path = dir.path().join("traces.jsonl");
    let rows = [
        json!({"trace_id": "t-001", "action": "search", "reward": 1.0}),
        json!({"trace_id": "t-002", "action": "answer"}),
        json!({"trace_id": 3, "action": "stop", "reward": 0.5}),
    ];
    let content: Vec<String> = rows.iter().map(|row| row.to_string()).collect();
    fs::write(&data_path, content.join("\n")).map_err(|e| datacommons::DatacommonsError::Io {
        path: data_path.clone(),
        source: e,
    })?;

    println!("== Validate");
    let schema: Schema = [("trace_id", "str"), ("action", "str"), ("reward", "float")]
        .into_iter()
        .map(|(field, type_name)| (field.to_string(), json!(type_name)))
        .collect();
    let validator = DatasetValidator::new();
    for message in validator.validate_schema(&data_path, &schema)? {
        println!("  {}", message);
    }

    println!("== Statistics");
    let report = validator.compute_statistics(&data_path)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("== Versions");
    let mut versions = VersionManager::new();
    for changes in ["Initial release.", "Added 1000 traces.", "Fixed labels."] {
        let entry = versions.create_version("agent-traces-001", changes);
        println!("  v{} {}", entry.version, entry.changes);
    }

    println!("== Integrity");
    let digest = compute_sha256(&data_path)?;
    let result = verify_file("agent-traces-001", &data_path, &digest)?;
    println!("  sha256={} verified={}", result.sha256, result.verified);

    Ok(())
}
