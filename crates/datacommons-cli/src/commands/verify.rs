//! Verify command - compare a downloaded file with its expected digest.

use std::path::PathBuf;

pub fn run(
    dataset_id: String,
    file: PathBuf,
    sha256: String,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = datacommons::verify_file(dataset_id, &file, &sha256)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    if !result.verified {
        return Err(format!(
            "Integrity check failed for '{}': expected {}, got {}",
            file.display(),
            sha256,
            result.sha256
        )
        .into());
    }

    Ok(())
}
