//! Disposable backing services for integration tests.
//!
//! Each fixture starts a container on construction and stops it on drop.

pub mod error;
pub mod mysql;
pub mod redis;

pub use error::{Result, TestInfraError};
