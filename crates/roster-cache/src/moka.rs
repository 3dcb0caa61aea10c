use async_trait::async_trait;
use moka::future::Cache;
use roster_core::cache::Result;
use roster_core::{CacheKey, Record, RecordCache};
use std::time::Duration;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// An in-memory cache implementation using Moka.
///
/// Unbounded unless configured otherwise: an evicted entry makes the record
/// unreachable by key and frees its nickname for reuse.
#[derive(Debug, Clone)]
pub struct MokaRecordCache {
    cache: Cache<CacheKey, Record>,
}

impl MokaRecordCache {
    /// Creates an unbounded cache.
    pub fn new() -> Self {
        Self {
            cache: Cache::builder().build(),
        }
    }

    /// Creates a cache holding at most `max_capacity` entries.
    ///
    /// Every record occupies two entries (id and nickname).
    pub fn with_capacity(max_capacity: u64) -> Self {
        Self {
            cache: Cache::builder().max_capacity(max_capacity).build(),
        }
    }

    /// Returns a builder for creating a custom cache configuration.
    pub fn builder() -> CacheConfigBuilder {
        CacheConfig::builder()
    }
}

impl Default for MokaRecordCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordCache for MokaRecordCache {
    async fn get_record(&self, key: &CacheKey) -> Result<Option<Record>> {
        match self.cache.get(key).await {
            Some(record) => {
                debug!(key = %key, "Cache hit in Moka");
                Ok(Some(record))
            }
            None => {
                trace!(key = %key, "Cache miss in Moka");
                Ok(None)
            }
        }
    }

    async fn set_record(&self, key: &CacheKey, record: &Record) -> Result<()> {
        self.cache.insert(key.clone(), record.clone()).await;
        debug!(key = %key, "Cached record in Moka");
        Ok(())
    }
}

/// Configuration for creating a MokaRecordCache with custom settings.
#[derive(Debug, TypedBuilder, Default)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold.
    #[builder(default, setter(strip_option))]
    max_capacity: Option<u64>,
    /// Time-to-live for cache entries.
    #[builder(default, setter(strip_option))]
    ttl: Option<Duration>,
    /// Time-to-idle for cache entries.
    #[builder(default, setter(strip_option))]
    tti: Option<Duration>,
}

impl From<CacheConfig> for MokaRecordCache {
    fn from(config: CacheConfig) -> Self {
        let mut builder = Cache::builder();

        if let Some(capacity) = config.max_capacity {
            builder = builder.max_capacity(capacity);
        }

        if let Some(ttl) = config.ttl {
            builder = builder.time_to_live(ttl);
        }

        if let Some(tti) = config.tti {
            builder = builder.time_to_idle(tti);
        }

        MokaRecordCache {
            cache: builder.build(),
        }
    }
}
