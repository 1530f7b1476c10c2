//! Search command - find datasets by text, format and tags.

use datacommons::DatasetFormat;

use crate::store::Workspace;

pub fn run(
    workspace: &Workspace,
    query: String,
    format: Option<DatasetFormat>,
    tags: Vec<String>,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tag_filter = (!tags.is_empty()).then_some(tags.as_slice());
    let results = workspace.catalog.search(&query, format, tag_filter);

    if results.is_empty() {
        println!("No datasets found matching the given criteria.");
        return Ok(());
    }

    for metadata in results {
        super::print_summary(metadata);
        println!("  {}", metadata.description);
        if !metadata.tags.is_empty() {
            println!("  Tags: {}", metadata.tags.join(", "));
        }
        println!();
    }

    Ok(())
}
