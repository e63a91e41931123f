//! # portal-core
//!
//! Core types and the article normalizer for article-portal.
//!
//! This crate provides the JSON:API wire model, the typed lookup index over a
//! document's `included` side-table, the flat [`ViewRecord`] view model, and
//! the pure [`normalize`] transform that joins them. Network access lives
//! behind the [`ArticleSource`] trait so the transform can be exercised
//! without an HTTP stack.

pub mod defaults;
pub mod error;
pub mod jsonapi;
pub mod logging;
pub mod models;
pub mod normalize;
pub mod resources;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use jsonapi::{CompoundDocument, RelationshipData, Resource, ResourceIdentifier};
pub use models::ViewRecord;
pub use normalize::{normalize, normalize_value};
pub use resources::{
    FileResource, IncludedIndex, IncludedResource, ResourceKind, TagResource, UserResource,
};
pub use traits::{load_articles, ArticleSource};
