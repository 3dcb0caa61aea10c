use crate::error::CacheError;
use crate::record::{Record, RecordId};
use async_trait::async_trait;
use std::fmt::Display;

pub type Result<T> = std::result::Result<T, CacheError>;

/// Key under which a record is projected into the cache.
///
/// Ids and nicknames live in separate namespaces, so a nickname that looks
/// like an id never shadows it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Id(RecordId),
    Nickname(String),
}

impl CacheKey {
    pub fn nickname(nickname: impl Into<String>) -> Self {
        Self::Nickname(nickname.into())
    }

    /// Both keys a finalized record is reachable by.
    pub fn for_record(record: &Record) -> [CacheKey; 2] {
        [
            CacheKey::Id(record.id),
            CacheKey::Nickname(record.nickname.clone()),
        ]
    }
}

impl From<RecordId> for CacheKey {
    fn from(id: RecordId) -> Self {
        Self::Id(id)
    }
}

impl Display for CacheKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CacheKey::Id(id) => write!(f, "id:{id}"),
            CacheKey::Nickname(nickname) => write!(f, "nickname:{nickname}"),
        }
    }
}

/// A volatile, non-authoritative cache of records.
///
/// The cache is used both to serve reads and to probe nickname uniqueness,
/// so an implementation that evicts entries weakens both.
#[async_trait]
pub trait RecordCache: Send + Sync + 'static {
    /// Get a record from the cache.
    ///
    /// Returns `Ok(None)` if the key is not in the cache.
    async fn get_record(&self, key: &CacheKey) -> Result<Option<Record>>;

    /// Store a record under `key`, overwriting any previous value.
    async fn set_record(&self, key: &CacheKey, record: &Record) -> Result<()>;

    /// Store one record under several keys.
    ///
    /// The default writes the keys one by one, so a failure can leave some of
    /// them written. Backends with a multi-key set should override this.
    async fn set_records(&self, keys: &[CacheKey], record: &Record) -> Result<()> {
        for key in keys {
            self.set_record(key, record).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NewRecord;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    #[derive(Default)]
    struct TestCache {
        items: Mutex<HashMap<CacheKey, Record>>,
    }

    #[async_trait]
    impl RecordCache for TestCache {
        async fn get_record(&self, key: &CacheKey) -> Result<Option<Record>> {
            let items = self.items.lock().await;
            Ok(items.get(key).cloned())
        }

        async fn set_record(&self, key: &CacheKey, record: &Record) -> Result<()> {
            let mut items = self.items.lock().await;
            items.insert(key.clone(), record.clone());
            Ok(())
        }
    }

    fn test_record(nickname: &str) -> Record {
        NewRecord {
            name: "Test".to_string(),
            nickname: nickname.to_string(),
            birthdate: "1990-01-01".to_string(),
            stack: None,
        }
        .into_record(RecordId::new())
    }

    #[test]
    fn keys_display_with_namespace() {
        let id = RecordId::new();
        assert_eq!(CacheKey::Id(id).to_string(), format!("id:{id}"));
        assert_eq!(CacheKey::nickname("joao").to_string(), "nickname:joao");
    }

    #[test]
    fn id_and_nickname_keys_never_collide() {
        let id = RecordId::new();
        assert_ne!(CacheKey::Id(id), CacheKey::nickname(id.to_string()));
    }

    #[tokio::test]
    async fn default_set_records_writes_every_key() {
        let cache = TestCache::default();
        let record = test_record("joao");
        let keys = CacheKey::for_record(&record);

        cache.set_records(&keys, &record).await.unwrap();

        for key in &keys {
            assert_eq!(cache.get_record(key).await.unwrap(), Some(record.clone()));
        }
    }
}
