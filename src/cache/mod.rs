//! Cache Module
//!
//! Provides a time-bounded memoizing cache around a single-argument producer.

mod clock;
mod entry;
mod memoizer;
mod stats;

#[cfg(test)]
pub(crate) mod testing;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use memoizer::{Producer, TtlMemoizer};
pub use stats::CacheStats;

// == Public Constants ==
/// TTL applied when none is configured, in seconds
pub const DEFAULT_TTL_SECS: u64 = 10;
