use async_trait::async_trait;
use roster_core::registry::Result;
use roster_core::{
    validate, CacheKey, NewRecord, Record, RecordCache, RecordId, RecordStore, Registry,
    ServiceError,
};
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// A concrete implementation of the [`Registry`] trait.
///
/// Writes go validator, nickname probe, store, cache. Reads by id or
/// nickname are served from the cache only: a miss is reported as `None`
/// even when the store holds the record. Search and count go straight to
/// the store.
///
/// Note: the nickname probe and the store write are separate calls with no
/// lock between them, so two concurrent creates with the same nickname can
/// both succeed.
#[derive(Debug)]
pub struct RecordService<S, C> {
    store: Arc<S>,
    cache: Arc<C>,
}

impl<S, C> Clone for RecordService<S, C> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            cache: Arc::clone(&self.cache),
        }
    }
}

impl<S: RecordStore, C: RecordCache> RecordService<S, C> {
    pub fn new(store: S, cache: C) -> Self {
        Self::from_shared(Arc::new(store), Arc::new(cache))
    }

    /// Creates a service over handles that are also used elsewhere.
    pub fn from_shared(store: Arc<S>, cache: Arc<C>) -> Self {
        Self { store, cache }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn cache(&self) -> &C {
        &self.cache
    }

    /// Projects a persisted record into the cache under both of its keys.
    async fn populate(&self, record: &Record) -> Result<()> {
        let keys = CacheKey::for_record(record);
        self.cache.set_records(&keys, record).await.map_err(|e| {
            warn!(
                id = %record.id,
                nickname = %record.nickname,
                error = %e,
                "Record persisted but not cached; it is unreachable by id and nickname"
            );
            ServiceError::from(e)
        })
    }
}

#[async_trait]
impl<S: RecordStore, C: RecordCache> Registry for RecordService<S, C> {
    async fn create(&self, candidate: NewRecord) -> Result<RecordId> {
        if let Err(e) = validate(&candidate) {
            debug!(nickname = %candidate.nickname, error = %e, "Rejected invalid record");
            return Err(e.into());
        }

        let probe = CacheKey::nickname(candidate.nickname.clone());
        if self.cache.get_record(&probe).await?.is_some() {
            debug!(nickname = %candidate.nickname, "Rejected duplicate nickname");
            return Err(ServiceError::DuplicateNickname(candidate.nickname));
        }

        let id = self.store.save(candidate.clone()).await?;
        let record = candidate.into_record(id);
        self.populate(&record).await?;

        info!(id = %id, nickname = %record.nickname, "Created record");
        Ok(id)
    }

    async fn get_by_id(&self, id: &RecordId) -> Result<Option<Record>> {
        trace!(id = %id, "Looking up record by id");
        Ok(self.cache.get_record(&CacheKey::Id(*id)).await?)
    }

    async fn get_by_nickname(&self, nickname: &str) -> Result<Option<Record>> {
        trace!(nickname = %nickname, "Looking up record by nickname");
        Ok(self.cache.get_record(&CacheKey::nickname(nickname)).await?)
    }

    async fn search(&self, term: &str) -> Result<Vec<Record>> {
        if term.trim().is_empty() {
            return Err(ServiceError::MissingCriteria);
        }

        let records = self.store.find_all(term).await?;
        debug!(term = %term, matches = records.len(), "Searched records");
        Ok(records)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.store.count().await?)
    }
}
