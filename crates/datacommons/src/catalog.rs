//! In-memory dataset catalog.

use indexmap::IndexMap;

use crate::error::{DatacommonsError, Result};
use crate::model::{DatasetFormat, DatasetMetadata};

/// Default page size for [`Catalog::list_all`] callers that have no opinion.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Registered datasets keyed by identifier, in registration order.
///
/// The catalog performs no I/O so callers can wrap it with whatever
/// storage they need.
///
/// # Example
///
/// ```
/// use datacommons::{Catalog, DatasetFormat, DatasetMetadata};
///
/// let mut catalog = Catalog::new();
/// let meta = DatasetMetadata::new("ds-001", "Agent Traces", "Runs", DatasetFormat::Jsonl, 10, 1, "MIT")
///     .unwrap()
///     .with_tags(["agents"]);
/// catalog.register(meta);
///
/// assert_eq!(catalog.search("agent", None, None).len(), 1);
/// assert!(catalog.get("ds-002").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    store: IndexMap<String, DatasetMetadata>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register or overwrite a dataset entry.
    ///
    /// Re-registering an identifier replaces the stored metadata wholesale
    /// but keeps its original position in registration order.
    pub fn register(&mut self, metadata: DatasetMetadata) {
        tracing::debug!(
            dataset_id = %metadata.dataset_id,
            version = %metadata.version,
            "registering dataset"
        );
        self.store.insert(metadata.dataset_id.clone(), metadata);
    }

    /// Retrieve a dataset by its ID.
    pub fn get(&self, dataset_id: &str) -> Result<&DatasetMetadata> {
        self.store
            .get(dataset_id)
            .ok_or_else(|| DatacommonsError::NotFound {
                dataset_id: dataset_id.to_string(),
            })
    }

    /// Search with optional filters.
    ///
    /// `query` is matched case-insensitively as a substring of the name or
    /// the description; an empty query matches everything. When `format` is
    /// given only datasets of that format match. When `tags` is given a
    /// dataset must carry every one of them.
    pub fn search(
        &self,
        query: &str,
        format: Option<DatasetFormat>,
        tags: Option<&[String]>,
    ) -> Vec<&DatasetMetadata> {
        let query_lower = query.to_lowercase();

        self.store
            .values()
            .filter(|d| {
                d.name.to_lowercase().contains(&query_lower)
                    || d.description.to_lowercase().contains(&query_lower)
            })
            .filter(|d| format.is_none_or(|f| d.format == f))
            .filter(|d| tags.is_none_or(|wanted| wanted.iter().all(|tag| d.has_tag(tag))))
            .collect()
    }

    /// Return a page of registered datasets.
    ///
    /// Out-of-range offsets yield an empty page.
    pub fn list_all(&self, limit: usize, offset: usize) -> Vec<&DatasetMetadata> {
        self.store.values().skip(offset).take(limit).collect()
    }

    /// Iterate over all datasets in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &DatasetMetadata> {
        self.store.values()
    }

    /// Returns true if `dataset_id` is registered.
    pub fn contains(&self, dataset_id: &str) -> bool {
        self.store.contains_key(dataset_id)
    }

    /// Number of registered datasets.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}

impl FromIterator<DatasetMetadata> for Catalog {
    fn from_iter<I: IntoIterator<Item = DatasetMetadata>>(iter: I) -> Self {
        let mut catalog = Catalog::new();
        for metadata in iter {
            catalog.register(metadata);
        }
        catalog
    }
}
