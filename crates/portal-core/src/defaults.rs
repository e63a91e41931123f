//! Centralized default constants for article-portal.
//!
//! **This module is the single source of truth** for shared default values.
//! Crates reference these constants instead of defining their own literals.

// =============================================================================
// CMS ENDPOINT
// =============================================================================

/// Origin of the headless CMS.
pub const CMS_URL: &str = "http://localhost:8080";

/// JSON:API collection path for articles.
pub const ARTICLES_PATH: &str = "/jsonapi/node/article";

/// Prefix joined in front of a file's `uri.url` to build an absolute image URL.
pub const IMAGE_BASE_URL: &str = "http://localhost:8080";

/// Timeout for the article fetch (seconds).
pub const FETCH_TIMEOUT_SECS: u64 = 30;

/// Fetches slower than this are logged at WARN.
pub const SLOW_FETCH_THRESHOLD_MS: u64 = 5_000;

/// Bytes of a non-2xx response body kept in the error.
pub const ERROR_BODY_LIMIT: usize = 512;

// =============================================================================
// JSON:API RESOURCE TYPES
// =============================================================================

/// Included resource type for article authors.
pub const USER_TYPE: &str = "user--user";

/// Included resource type for uploaded files.
pub const FILE_TYPE: &str = "file--file";

/// Included resource type for tag taxonomy terms.
pub const TAG_TYPE: &str = "taxonomy_term--tags";

// =============================================================================
// RELATIONSHIP NAMES
// =============================================================================

pub const FIELD_AUTHOR: &str = "field_author";
pub const FIELD_IMAGE: &str = "field_image";
pub const FIELD_TAGS: &str = "field_tags";

// =============================================================================
// PLACEHOLDERS
// =============================================================================

/// Author name shown when the author cannot be resolved.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

/// Tag name shown for a tag reference missing from `included`.
pub const UNKNOWN_TAG: &str = "Unknown Tag";

// =============================================================================
// RENDERING
// =============================================================================

/// Number of skeleton cards rendered while articles are loading.
pub const SKELETON_COUNT: usize = 6;

/// Page heading.
pub const PAGE_HEADING: &str = "This is Simple Article Portal From Drupal Headless CMS";

// =============================================================================
// SERVER
// =============================================================================

pub const SERVER_HOST: &str = "0.0.0.0";
pub const SERVER_PORT: u16 = 3000;

// =============================================================================
// ENVIRONMENT VARIABLES
// =============================================================================

pub const ENV_CMS_URL: &str = "PORTAL_CMS_URL";
pub const ENV_ARTICLES_PATH: &str = "PORTAL_ARTICLES_PATH";
pub const ENV_IMAGE_BASE_URL: &str = "PORTAL_IMAGE_BASE_URL";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "PORTAL_FETCH_TIMEOUT_SECS";
pub const ENV_HOST: &str = "PORTAL_HOST";
pub const ENV_PORT: &str = "PORTAL_PORT";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_articles_path_is_absolute() {
        assert!(ARTICLES_PATH.starts_with('/'));
    }

    #[test]
    fn test_base_urls_have_no_trailing_slash() {
        assert!(!CMS_URL.ends_with('/'));
        assert!(!IMAGE_BASE_URL.ends_with('/'));
    }

    #[test]
    fn test_placeholders_are_distinct() {
        assert_ne!(UNKNOWN_AUTHOR, UNKNOWN_TAG);
    }
}
