use async_trait::async_trait;
use dashmap::DashMap;
use hashlink_core::{ReadRepository, Repository, ShortCode, ShortLink, StorageError};
use tracing::trace;

type Result<T> = std::result::Result<T, StorageError>;

/// In-memory implementation of the Repository trait using DashMap.
///
/// DashMap provides better concurrency than RwLock<HashMap> because it
/// uses sharded locks, allowing concurrent reads and writes to different
/// buckets without blocking. Every access holds its shard lock, so racing
/// writes to the same code never interleave.
///
/// Contents live only as long as the repository; nothing is persisted.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    storage: DashMap<ShortCode, ShortLink>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRepository for InMemoryRepository {
    async fn get(&self, code: &ShortCode) -> Result<Option<ShortLink>> {
        Ok(self.storage.get(code).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, code: &ShortCode) -> Result<bool> {
        Ok(self.storage.contains_key(code))
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn upsert(&self, link: ShortLink) -> Result<Option<ShortLink>> {
        trace!(code = %link.id, "writing link");
        Ok(self.storage.insert(link.id.clone(), link))
    }
}
