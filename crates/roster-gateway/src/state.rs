use std::sync::Arc;

use roster_core::{RecordId, Registry};

#[derive(Clone)]
pub struct AppState {
    registry: Arc<dyn Registry>,
    base_url: String,
}

impl AppState {
    pub fn new(registry: Arc<dyn Registry>, public_base_url: impl Into<String>) -> Self {
        Self {
            registry,
            base_url: public_base_url.into(),
        }
    }

    pub fn registry(&self) -> &dyn Registry {
        self.registry.as_ref()
    }

    /// Public URL of a created record, used for the `Location` header.
    pub fn record_url(&self, id: &RecordId) -> String {
        format!("{}/pessoas/{}", self.base_url.trim_end_matches('/'), id)
    }
}
