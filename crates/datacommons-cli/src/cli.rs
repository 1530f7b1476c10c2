//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use datacommons::DatasetFormat;
use std::path::PathBuf;

/// Datacommons: open datasets for agent development
#[derive(Parser)]
#[command(name = "datacommons")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Catalog snapshot to load before and save after the command
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the dataset catalog
    Search {
        /// Substring to match against names and descriptions
        #[arg(short, long)]
        query: String,

        /// Only show datasets of this format (jsonl, csv, parquet, arrow)
        #[arg(short, long)]
        format: Option<DatasetFormat>,

        /// Only show datasets carrying this tag (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Register a dataset from a JSON config file
    Register {
        /// JSON file whose keys are the dataset metadata fields
        #[arg(short, long, value_name = "FILE")]
        config: PathBuf,
    },

    /// Validate a JSONL dataset against a schema
    Validate {
        /// Path to the JSONL dataset
        #[arg(short, long, value_name = "FILE")]
        dataset: PathBuf,

        /// JSON file mapping field names to type names
        #[arg(short, long, value_name = "FILE")]
        schema: PathBuf,
    },

    /// Print row, null and type statistics for a JSONL or CSV file
    Stats {
        /// Path to the dataset
        #[arg(short, long, value_name = "FILE")]
        dataset: PathBuf,
    },

    /// List registered datasets
    List {
        /// Maximum number of datasets to show
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Number of datasets to skip
        #[arg(short, long, default_value = "0")]
        offset: usize,
    },

    /// Show full metadata for a dataset
    Get {
        /// Dataset identifier
        #[arg(value_name = "DATASET_ID")]
        dataset_id: String,
    },

    /// Show the version history of a dataset
    Versions {
        /// Dataset identifier
        #[arg(value_name = "DATASET_ID")]
        dataset_id: String,
    },

    /// Print the SHA-256 digest of a file
    Hash {
        /// File to hash
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Check a downloaded file against its expected SHA-256 digest
    Verify {
        /// Dataset identifier the file belongs to
        #[arg(value_name = "DATASET_ID")]
        dataset_id: String,

        /// Downloaded file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Expected hex digest
        #[arg(long, value_name = "HEX")]
        sha256: String,
    },
}
