//! Page Cache - A TTL-memoizing web page fetcher
//!
//! Serves fetched pages from memory until they go stale, then fetches again.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;

pub use api::AppState;
pub use cache::{Clock, ManualClock, Producer, SystemClock, TtlMemoizer};
pub use config::Config;
pub use fetch::HttpFetcher;
