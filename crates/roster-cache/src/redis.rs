use async_trait::async_trait;
use redis::AsyncCommands;
use roster_core::cache::Result;
use roster_core::{CacheError, CacheKey, Record, RecordCache};
use tracing::{debug, trace, warn};

pub const DEFAULT_KEY_PREFIX: &str = "roster:";

/// A Redis-based implementation of [`RecordCache`].
///
/// Records are stored as JSON strings under `{prefix}id:{uuid}` and
/// `{prefix}nickname:{nickname}`. Multi-key writes go through `MSET`, so a
/// record becomes reachable by both keys at once.
#[derive(Debug, Clone)]
pub struct RedisRecordCache {
    conn: redis::aio::MultiplexedConnection,
    key_prefix: String,
}

fn map_redis_error(operation: &str, err: redis::RedisError) -> CacheError {
    let message = format!("{operation}: {err}");
    if message.to_ascii_lowercase().contains("timed out") {
        CacheError::Timeout(message)
    } else {
        CacheError::Operation(message)
    }
}

fn encode(record: &Record) -> Result<String> {
    serde_json::to_string(record).map_err(|e| {
        warn!(id = %record.id, error = %e, "Failed to serialize record for caching");
        CacheError::Serialization(format!("failed to serialize cache value: {e}"))
    })
}

impl RedisRecordCache {
    /// Creates a new Redis record cache using [`DEFAULT_KEY_PREFIX`].
    pub fn new(conn: redis::aio::MultiplexedConnection) -> Self {
        Self::with_prefix(conn, DEFAULT_KEY_PREFIX)
    }

    /// Creates a new Redis record cache with a custom key prefix.
    pub fn with_prefix(
        conn: redis::aio::MultiplexedConnection,
        key_prefix: impl Into<String>,
    ) -> Self {
        Self {
            conn,
            key_prefix: key_prefix.into(),
        }
    }

    /// Opens a multiplexed connection to `redis_url` and wraps it.
    pub async fn connect(redis_url: &str, key_prefix: impl Into<String>) -> Result<Self> {
        let client = redis::Client::open(redis_url).map_err(|e| {
            CacheError::Unavailable(format!("invalid Redis connection info: {e}"))
        })?;
        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| CacheError::Unavailable(format!("failed to connect to Redis: {e}")))?;
        Ok(Self::with_prefix(conn, key_prefix))
    }

    /// Generates the Redis key for a cache key.
    pub fn cache_key(&self, key: &CacheKey) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl RecordCache for RedisRecordCache {
    async fn get_record(&self, key: &CacheKey) -> Result<Option<Record>> {
        let redis_key = self.cache_key(key);
        trace!(key = %key, "Fetching record from Redis cache");

        let mut conn = self.conn.clone();
        match conn.get::<_, Option<String>>(&redis_key).await {
            Ok(Some(cached)) => {
                debug!(key = %key, "Cache hit in Redis");
                serde_json::from_str::<Record>(&cached)
                    .map(Some)
                    .map_err(|e| {
                        warn!(key = %key, error = %e, "Failed to deserialize cached record");
                        CacheError::InvalidData(format!(
                            "invalid cached value for key '{redis_key}': {e}"
                        ))
                    })
            }
            Ok(None) => {
                trace!(key = %key, "Cache miss in Redis");
                Ok(None)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Redis error on get");
                Err(map_redis_error("failed to fetch value from Redis", e))
            }
        }
    }

    async fn set_record(&self, key: &CacheKey, record: &Record) -> Result<()> {
        let redis_key = self.cache_key(key);
        let json = encode(record)?;

        let mut conn = self.conn.clone();
        match conn.set::<_, _, ()>(&redis_key, json).await {
            Ok(()) => {
                debug!(key = %key, "Cached record in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to cache record in Redis");
                Err(map_redis_error("failed to write value to Redis", e))
            }
        }
    }

    async fn set_records(&self, keys: &[CacheKey], record: &Record) -> Result<()> {
        if keys.is_empty() {
            return Ok(());
        }

        let json = encode(record)?;
        let items: Vec<(String, &str)> = keys
            .iter()
            .map(|key| (self.cache_key(key), json.as_str()))
            .collect();

        let mut conn = self.conn.clone();
        match conn.mset::<_, _, ()>(items.as_slice()).await {
            Ok(()) => {
                debug!(id = %record.id, keys = keys.len(), "Cached record in Redis");
                Ok(())
            }
            Err(e) => {
                warn!(id = %record.id, error = %e, "Failed to cache record in Redis");
                Err(map_redis_error("failed to write values to Redis", e))
            }
        }
    }
}
