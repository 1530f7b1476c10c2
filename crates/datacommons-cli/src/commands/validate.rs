//! Validate command - check a JSONL file against a schema file.

use std::path::PathBuf;

use colored::Colorize;
use datacommons::{DatasetValidator, config};

pub fn run(
    dataset: PathBuf,
    schema_path: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let schema = config::load_schema(&schema_path)?;
    if verbose {
        println!(
            "Validating {} against {} field(s)",
            dataset.display(),
            schema.len()
        );
    }

    let errors = DatasetValidator::new().validate_schema(&dataset, &schema)?;

    if errors.is_empty() {
        println!("{}", "Validation passed - no errors found.".green());
        return Ok(());
    }

    println!(
        "{}",
        format!("Validation failed with {} error(s):", errors.len()).red().bold()
    );
    for error in &errors {
        println!("  - {}", error);
    }

    Err(format!("{} validation error(s) in {}", errors.len(), dataset.display()).into())
}
