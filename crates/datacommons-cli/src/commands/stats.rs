//! Stats command - print dataset statistics as JSON.

use std::path::PathBuf;

use datacommons::DatasetValidator;

pub fn run(dataset: PathBuf, _verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let report = DatasetValidator::new().compute_statistics(&dataset)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
