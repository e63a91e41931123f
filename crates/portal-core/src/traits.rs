//! Core traits for article-portal abstractions.
//!
//! The fetch is the only asynchronous step; normalization runs synchronously
//! once the document is in memory.

use async_trait::async_trait;

use crate::error::Result;
use crate::jsonapi::CompoundDocument;
use crate::models::ViewRecord;
use crate::normalize::normalize;

/// Supplier of the article collection document.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch and decode the article collection.
    async fn fetch_articles(&self) -> Result<CompoundDocument>;
}

/// Fetch the collection from `source`, then normalize it.
///
/// Transport, decode and malformed-document failures all surface here as one
/// `Err`; relationship misses do not.
pub async fn load_articles(
    source: &dyn ArticleSource,
    image_base_url: &str,
) -> Result<Vec<ViewRecord>> {
    let document = source.fetch_articles().await?;
    Ok(normalize(&document, image_base_url))
}
