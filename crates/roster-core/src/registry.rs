use crate::error::{CacheError, StorageError, ValidationError};
use crate::record::{NewRecord, Record, RecordId};
use async_trait::async_trait;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServiceError>;

#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
    #[error("nickname already taken: {0}")]
    DuplicateNickname(String),
    #[error("search term is required")]
    MissingCriteria,
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
    #[error("cache unavailable: {0}")]
    CacheUnavailable(#[from] CacheError),
}

/// Operations exposed to the request-handling layer.
#[async_trait]
pub trait Registry: Send + Sync + 'static {
    /// Validates and persists a candidate, then projects it into the cache.
    /// Returns the store-assigned identifier.
    async fn create(&self, candidate: NewRecord) -> Result<RecordId>;

    /// Looks up a record by id. Returns `None` on a cache miss.
    async fn get_by_id(&self, id: &RecordId) -> Result<Option<Record>>;

    /// Looks up a record by nickname. Returns `None` on a cache miss.
    async fn get_by_nickname(&self, nickname: &str) -> Result<Option<Record>>;

    /// Searches the store for records matching `term`.
    async fn search(&self, term: &str) -> Result<Vec<Record>>;

    /// Total number of records in the store.
    async fn count(&self) -> Result<u64>;
}
