//! Structured logging field name constants for article-portal.
//!
//! All crates use these names for `tracing` fields so log aggregation can
//! query by the same keys across subsystems. `tracing` macros take field
//! names as identifiers, so call sites spell them out. Fields local to one
//! event (config dumps, env fallbacks) are not catalogued.
//!
//! ## Log Level Contract
//!
//! | Level | Usage |
//! |-------|-------|
//! | ERROR | Fetch or decode failed, page rendered empty |
//! | WARN  | Degraded data (dangling references), slow fetches, config fallbacks |
//! | INFO  | Lifecycle events (startup), fetch completions |
//! | DEBUG | Decision points, normalization summaries |
//! | TRACE | Per-article iteration |

// ─── Identity fields ───────────────────────────────────────────────────────

/// Subsystem originating the log event.
/// Values: "client", "core", "web"
pub const SUBSYSTEM: &str = "subsystem";

/// Component within a subsystem.
/// Examples: "jsonapi", "normalizer", "render"
pub const COMPONENT: &str = "component";

/// Logical operation name.
/// Examples: "fetch_articles", "normalize", "render_grid"
pub const OPERATION: &str = "op";

// ─── Entity fields ─────────────────────────────────────────────────────────

/// Primary resource id.
pub const ARTICLE_ID: &str = "article_id";

/// Remote URL requested.
pub const URL: &str = "url";

/// HTTP status code returned by the CMS.
pub const STATUS: &str = "status";

// ─── Measurement fields ────────────────────────────────────────────────────

/// Wall-clock duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// Number of primary resources in a document or view records rendered.
pub const ARTICLE_COUNT: &str = "article_count";

/// Number of resources in the `included` side-table.
pub const INCLUDED_COUNT: &str = "included_count";

/// Response body length in bytes.
pub const RESPONSE_LEN: &str = "response_len";

// ─── Resolution fields ─────────────────────────────────────────────────────

/// Authors that resolved to the placeholder.
pub const UNKNOWN_AUTHORS: &str = "unknown_authors";

/// Articles rendered without an image URL.
pub const MISSING_IMAGES: &str = "missing_images";

/// Tag references that resolved to the placeholder.
pub const UNKNOWN_TAGS: &str = "unknown_tags";

/// References into `included` that matched nothing.
pub const DANGLING: &str = "dangling";

/// Included resources that could not be decoded into a known kind.
pub const INCLUDED_SKIPPED: &str = "included_skipped";

// ─── Outcome fields ────────────────────────────────────────────────────────

/// Error message when an operation fails.
pub const ERROR_MSG: &str = "error";
