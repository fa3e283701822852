//! News domain types and the headline API client
//!
//! Articles are kept opaque: the upstream API's records are cached and
//! served verbatim, with no internal schema enforced.

pub mod client;

pub use client::{NewsClient, NewsError, RetryPolicy};

use chrono::Duration;

/// An article as returned by the upstream headline API
///
/// Stored and served as-is; the backend never inspects individual fields.
pub type Article = serde_json::Value;

/// Categories the backend will fetch and serve
///
/// Used both as cache keys and as the upstream `topic` query parameter.
/// Requests for anything outside this list are rejected with a client error.
pub const ALLOWED_CATEGORIES: &[&str] = &["politics"];

/// How long a cached entry stays fresh: 5 hours 30 minutes
pub const CACHE_EXPIRY_MINUTES: i64 = 5 * 60 + 30;

/// Expiry window as a chrono duration
pub fn cache_expiry() -> Duration {
    Duration::minutes(CACHE_EXPIRY_MINUTES)
}

/// Default category allow-list as owned strings
pub fn default_categories() -> Vec<String> {
    ALLOWED_CATEGORIES.iter().map(|c| c.to_string()).collect()
}
