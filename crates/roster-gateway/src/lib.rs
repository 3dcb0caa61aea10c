//! HTTP front end for the record service.
//!
//! Maps the [`roster_core::Registry`] operations onto the `/pessoas` routes
//! and translates [`roster_core::ServiceError`] into status codes.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use state::AppState;
