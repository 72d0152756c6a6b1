//! Request DTOs for the page cache API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string for the page operation (GET /page?url=...)
///
/// The URL is passed to the fetcher as-is; empty or malformed values
/// surface as fetch failures.
#[derive(Debug, Clone, Deserialize)]
pub struct PageQuery {
    /// The page to fetch
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_deserialize() {
        let json = r#"{"url": "http://example.com"}"#;
        let query: PageQuery = serde_json::from_str(json).unwrap();
        assert_eq!(query.url, "http://example.com");
    }

    #[test]
    fn test_page_query_requires_url() {
        let result = serde_json::from_str::<PageQuery>("{}");
        assert!(result.is_err());
    }
}
