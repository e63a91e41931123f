//! # portal-client
//!
//! Fetches the article collection from a headless CMS's JSON:API endpoint.
//!
//! This crate provides:
//! - [`ClientConfig`]: endpoint, image base URL and timeout, loaded from
//!   environment variables
//! - [`JsonApiClient`]: a `reqwest` implementation of
//!   [`portal_core::ArticleSource`]
//!
//! # Example
//!
//! ```rust,no_run
//! use portal_client::{ClientConfig, JsonApiClient};
//! use portal_core::load_articles;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ClientConfig::from_env();
//!     let client = JsonApiClient::new(config.clone()).unwrap();
//!     let records = load_articles(&client, &config.image_base_url).await.unwrap();
//!     println!("{} articles", records.len());
//! }
//! ```

pub mod config;
pub mod jsonapi;

pub use config::{parse_env_or, ClientConfig, ConfigError, ConfigResult};
pub use jsonapi::JsonApiClient;
