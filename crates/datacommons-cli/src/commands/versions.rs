//! Versions command - show a dataset's version history.

use colored::Colorize;

use crate::store::Workspace;

pub fn run(
    workspace: &Workspace,
    dataset_id: String,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let versions = workspace.versions.list_versions(&dataset_id);

    if versions.is_empty() {
        println!("No versions recorded for '{}'.", dataset_id);
        return Ok(());
    }

    println!("{} {}", "Version history for".cyan().bold(), dataset_id.white());
    for entry in &versions {
        println!(
            "  {} {} {}",
            format!("v{}", entry.version).yellow(),
            entry.created_at.format("%Y-%m-%d %H:%M:%S UTC"),
            entry.changes
        );
    }

    Ok(())
}
