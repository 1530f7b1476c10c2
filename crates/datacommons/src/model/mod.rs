//! Value objects describing datasets.

mod download;
mod metadata;
mod types;

pub use download::DownloadResult;
pub use metadata::{DEFAULT_VERSION, DatasetMetadata, DatasetVersion, Schema};
pub use types::{DatasetFormat, ValueType};
