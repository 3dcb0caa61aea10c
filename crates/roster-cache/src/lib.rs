//! Record cache implementations.
//!
//! Provides a Redis-backed cache for shared deployments and a Moka-backed
//! in-process cache for single-node use and tests.

pub mod moka;
pub mod redis;

pub use self::moka::{CacheConfig, MokaRecordCache};
pub use self::redis::RedisRecordCache;
