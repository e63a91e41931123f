//! Shared application state.

use std::sync::Arc;

use portal_core::ArticleSource;

/// Handles shared by every request. Holds no per-request data.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ArticleSource>,
    pub image_base_url: Arc<str>,
}

impl AppState {
    pub fn new(source: Arc<dyn ArticleSource>, image_base_url: impl Into<Arc<str>>) -> Self {
        Self {
            source,
            image_base_url: image_base_url.into(),
        }
    }
}
