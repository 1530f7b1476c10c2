//! Get command - print full metadata for one dataset.

use crate::store::Workspace;

pub fn run(
    workspace: &Workspace,
    dataset_id: String,
    _verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let metadata = workspace.catalog.get(&dataset_id)?;
    println!("{}", serde_json::to_string_pretty(metadata)?);
    Ok(())
}
