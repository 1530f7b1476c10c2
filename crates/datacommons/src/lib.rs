//! Datacommons: metadata management for agent-training datasets.
//!
//! The library is a set of small, in-process building blocks:
//!
//! - [`Catalog`]: registered datasets with substring, format and tag search
//! - [`DatasetValidator`]: JSONL schema checks and JSONL/CSV statistics
//! - [`VersionManager`]: append-only minor-bump version history
//! - [`compute_sha256`]: streaming file digests for integrity checks
//!
//! Nothing is persisted; callers own storage.
//!
//! # Example
//!
//! ```no_run
//! use datacommons::{Catalog, DatasetValidator, VersionManager, config};
//!
//! let mut catalog = Catalog::new();
//! let mut versions = VersionManager::new();
//!
//! let metadata = config::load_metadata("dataset.json").unwrap();
//! versions.create_version(&metadata.dataset_id, "Initial registration.");
//! catalog.register(metadata);
//!
//! let schema = config::load_schema("schema.json").unwrap();
//! for message in DatasetValidator::new().validate_schema("data.jsonl", &schema).unwrap() {
//!     println!("{}", message);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod digest;
pub mod error;
pub mod model;
pub mod validation;
pub mod version;

pub use catalog::Catalog;
pub use digest::{Sha256Digester, compute_sha256, verify_file};
pub use error::{DatacommonsError, Result};
pub use model::{DatasetFormat, DatasetMetadata, DatasetVersion, DownloadResult, Schema, ValueType};
pub use validation::{DatasetStatistics, DatasetValidator, SchemaIssue, StatisticsReport};
pub use version::VersionManager;
