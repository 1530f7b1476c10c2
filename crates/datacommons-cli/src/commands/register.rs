//! Register command - add a dataset from a JSON config file.

use std::path::PathBuf;

use colored::Colorize;
use datacommons::config;

use crate::store::Workspace;

/// Change description recorded for the first version of a dataset.
const INITIAL_CHANGES: &str = "Initial registration.";

pub fn run(
    workspace: &mut Workspace,
    config_path: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = config::load_metadata(&config_path)?;
    let dataset_id = metadata.dataset_id.clone();
    let version = metadata.version.clone();

    workspace.catalog.register(metadata);
    let entry = workspace.versions.create_version(&dataset_id, INITIAL_CHANGES);
    workspace.save()?;

    println!(
        "{} Dataset '{}' registered successfully (v{}).",
        "✓".green().bold(),
        dataset_id,
        version
    );
    if verbose {
        println!("  History entry: {} ({})", entry.version, entry.changes);
    }

    Ok(())
}
