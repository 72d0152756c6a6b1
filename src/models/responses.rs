//! Response DTOs for the page cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::cache::{CacheEntry, CacheStats};

/// Response body for the page operation (GET /page)
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    /// The requested URL
    pub url: String,
    /// Page body, served from cache or freshly fetched
    pub content: String,
    /// Times the cached entry has been served
    pub hit_count: u64,
    /// When the cached entry goes stale
    pub expires_at: DateTime<Utc>,
}

impl PageResponse {
    /// Creates a PageResponse from the entry that served the request
    pub fn new(url: impl Into<String>, entry: &CacheEntry<String>) -> Self {
        Self {
            url: url.into(),
            content: entry.content.clone(),
            hit_count: entry.hit_count,
            expires_at: entry.expiration,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of failed fetches
    pub failures: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            failures: stats.failures,
            total_entries: stats.total_entries,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_page_response_from_entry() {
        let expiration = Utc::now() + Duration::seconds(10);
        let mut entry = CacheEntry::new("<html>A</html>".to_string(), expiration);
        entry.record_hit();

        let resp = PageResponse::new("http://example.com", &entry);
        assert_eq!(resp.content, "<html>A</html>");
        assert_eq!(resp.hit_count, 2);
        assert_eq!(resp.expires_at, expiration);

        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("http://example.com"));
        assert!(json.contains("expires_at"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            failures: 5,
            total_entries: 15,
        };
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.failures, 5);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::from(CacheStats::new());
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
