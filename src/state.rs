//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::MappingService;
use crate::infrastructure::qr::QrRenderer;

#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
    pub qr_renderer: Arc<dyn QrRenderer>,
    /// Public origin short links are built from, without trailing slash.
    pub base_url: Arc<str>,
}

impl AppState {
    pub fn new(
        mapping_service: Arc<MappingService>,
        qr_renderer: Arc<dyn QrRenderer>,
        base_url: &str,
    ) -> Self {
        Self {
            mapping_service,
            qr_renderer,
            base_url: Arc::from(base_url.trim_end_matches('/')),
        }
    }

    /// Fully qualified short link for `code`.
    pub fn short_link(&self, code: &str) -> String {
        format!("{}/{}", self.base_url, code)
    }
}
