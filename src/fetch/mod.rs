//! Fetch Module
//!
//! The page producer the cache wraps: an HTTP GET returning the body text.

mod http;

pub use http::HttpFetcher;

// == Public Constants ==
/// Request timeout applied when none is configured, in seconds
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;
