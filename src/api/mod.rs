//! API Module
//!
//! HTTP handlers and routing for the page cache REST API.
//!
//! # Endpoints
//! - `GET /page?url=<url>` - Fetch a page through the cache
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
