//! Error types for the page cache
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Fetch Error Enum ==
/// Failure of the page fetcher.
///
/// HTTP error statuses are not failures; only transport problems are.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request could not be built, sent, or its body read
    #[error("Fetch failed: {0}")]
    Transport(#[from] reqwest::Error),
}

// == Cache Error Enum ==
/// Unified error type for the page cache.
#[derive(Error, Debug)]
pub enum CacheError {
    /// TTL is zero or out of range
    #[error("Invalid TTL: {0}")]
    InvalidTtl(String),

    /// The producer behind the cache failed
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

// == IntoResponse Implementation ==
impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = match &self {
            CacheError::InvalidTtl(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CacheError::Fetch(_) => StatusCode::BAD_GATEWAY,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the page cache.
pub type Result<T> = std::result::Result<T, CacheError>;
