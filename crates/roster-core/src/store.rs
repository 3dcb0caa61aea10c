use crate::error::StorageError;
use crate::record::{NewRecord, Record, RecordId};
use async_trait::async_trait;

pub type Result<T> = std::result::Result<T, StorageError>;

/// The durable, authoritative record store.
///
/// The store is the only source of record identifiers. It does not enforce
/// nickname uniqueness.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Persists a candidate and returns the identifier assigned to it.
    async fn save(&self, record: NewRecord) -> Result<RecordId>;

    /// Returns every record whose name, nickname, or stack tags contain `term`.
    async fn find_all(&self, term: &str) -> Result<Vec<Record>>;

    /// Total number of persisted records.
    async fn count(&self) -> Result<u64>;
}
