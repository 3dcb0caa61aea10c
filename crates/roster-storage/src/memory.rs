use async_trait::async_trait;
use dashmap::DashMap;
use roster_core::store::Result;
use roster_core::{NewRecord, Record, RecordId, RecordStore};
use tracing::trace;

/// In-memory implementation of [`RecordStore`] using DashMap.
///
/// Sharded locks let concurrent saves and scans proceed without a global
/// lock. Search is a full scan, matching case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    storage: DashMap<RecordId, Record>,
}

impl InMemoryStore {
    /// Creates a new in-memory store.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Reads a record straight from the store. Not part of [`RecordStore`].
    pub fn get(&self, id: &RecordId) -> Option<Record> {
        self.storage.get(id).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl RecordStore for InMemoryStore {
    async fn save(&self, record: NewRecord) -> Result<RecordId> {
        let id = RecordId::new();
        trace!(id = %id, nickname = %record.nickname, "Saving record in memory");
        self.storage.insert(id, record.into_record(id));
        Ok(id)
    }

    async fn find_all(&self, term: &str) -> Result<Vec<Record>> {
        let term = term.to_lowercase();
        Ok(self
            .storage
            .iter()
            .filter(|entry| entry.value().matches_lowercase(&term))
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.storage.len() as u64)
    }
}
