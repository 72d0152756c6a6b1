//! API Handlers
//!
//! HTTP request handlers for each page cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::{Clock, SystemClock, TtlMemoizer};
use crate::config::Config;
use crate::error::Result;
use crate::fetch::HttpFetcher;
use crate::models::{HealthResponse, PageQuery, PageResponse, StatsResponse};

/// The memoized page fetcher served by the API.
pub type PageCache = TtlMemoizer<HttpFetcher, Arc<dyn Clock>>;

/// Application state shared across all handlers.
///
/// The write lock is held for a whole lookup, so concurrent requests for a
/// stale page trigger a single fetch.
#[derive(Clone)]
pub struct AppState {
    /// Shared page cache
    pub cache: Arc<RwLock<PageCache>>,
}

impl AppState {
    /// Creates a new AppState around the given cache.
    pub fn new(cache: PageCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the HTTP fetcher and the memoizer on the system clock.
    pub fn from_config(config: &Config) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.fetch_timeout())?;
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let cache = TtlMemoizer::with_clock(fetcher, config.ttl(), clock)?;
        Ok(Self::new(cache))
    }
}

/// Handler for GET /page?url=...
///
/// Serves the page from cache while fresh, otherwise fetches it.
pub async fn page_handler(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> Result<Json<PageResponse>> {
    let mut cache = state.cache.write().await;
    let entry = cache.lookup(query.url.clone()).await?;

    Ok(Json(PageResponse::new(query.url, entry)))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;
    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;

    fn test_state() -> AppState {
        AppState::from_config(&Config::default()).unwrap()
    }

    #[test]
    fn test_from_config_rejects_zero_ttl() {
        let config = Config {
            cache_ttl: 0,
            ..Config::default()
        };
        let result = AppState::from_config(&config);
        assert!(matches!(result, Err(CacheError::InvalidTtl(_))));
    }

    #[tokio::test]
    async fn test_page_handler_malformed_url() {
        let state = test_state();

        let query = PageQuery {
            url: "not a url".to_string(),
        };
        let result = page_handler(State(state.clone()), Query(query)).await;
        assert!(matches!(result, Err(CacheError::Fetch(_))));

        // Failed fetches leave nothing behind
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = test_state();

        let _ = page_handler(
            State(state.clone()),
            Query(PageQuery { url: String::new() }),
        )
        .await;

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 1);
        assert_eq!(response.failures, 1);
        assert_eq!(response.total_entries, 0);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
