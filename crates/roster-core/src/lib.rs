//! Core types and traits for the Roster record service.
//!
//! This crate defines the record model, the structural validator, and the
//! collaborator contracts ([`RecordStore`], [`RecordCache`]) that the
//! cache-aside [`Registry`] implementation is written against.

pub mod cache;
pub mod error;
pub mod record;
pub mod registry;
pub mod store;
pub mod validation;

pub use cache::{CacheKey, RecordCache};
pub use error::{CacheError, StorageError, ValidationError};
pub use record::{NewRecord, Record, RecordId};
pub use registry::{Registry, ServiceError};
pub use store::RecordStore;
pub use validation::validate;
