//! Cache-aside record service.
//!
//! [`RecordService`] implements [`roster_core::Registry`] on top of any
//! [`roster_core::RecordStore`] and [`roster_core::RecordCache`] pair.

pub mod service;

pub use roster_core::{Registry, ServiceError};
pub use service::RecordService;
