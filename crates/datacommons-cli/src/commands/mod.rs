//! CLI command implementations.

pub mod get;
pub mod hash;
pub mod list;
pub mod register;
pub mod search;
pub mod stats;
pub mod validate;
pub mod verify;
pub mod versions;

use colored::Colorize;
use datacommons::DatasetMetadata;

/// One-line summary used by `search`.
pub(crate) fn print_summary(metadata: &DatasetMetadata) {
    println!(
        "{} {} v{} ({}, {} records)",
        format!("[{}]", metadata.dataset_id).cyan().bold(),
        metadata.name.white(),
        metadata.version,
        metadata.format,
        metadata.num_records
    );
}
