//! List command - page through registered datasets.

use colored::Colorize;

use crate::store::Workspace;

pub fn run(
    workspace: &Workspace,
    limit: usize,
    offset: usize,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let items = workspace.catalog.list_all(limit, offset);

    if items.is_empty() {
        println!("No datasets registered.");
        return Ok(());
    }

    for metadata in &items {
        println!(
            "{} {} v{} - {}",
            format!("[{}]", metadata.dataset_id).cyan().bold(),
            metadata.name,
            metadata.version,
            metadata.format
        );
    }

    if verbose {
        println!();
        println!(
            "Showing {}-{} of {}",
            offset + 1,
            offset + items.len(),
            workspace.catalog.len()
        );
    }

    Ok(())
}
