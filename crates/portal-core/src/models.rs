//! View model handed to the rendering layer.

use serde::{Deserialize, Serialize};

/// Flat, display-ready projection of one article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewRecord {
    pub id: String,
    pub title: String,
    pub author_name: String,
    /// Absolute image URL, or empty when the article has no resolvable image.
    pub image_url: String,
    pub tags: Vec<String>,
}

impl ViewRecord {
    pub fn has_image(&self) -> bool {
        !self.image_url.is_empty()
    }
}
