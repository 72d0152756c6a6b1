//! Cache Entry Module
//!
//! Defines a single memoized result together with its freshness deadline.

use chrono::{DateTime, Utc};

// == Cache Entry ==
/// A stored producer result with expiration and hit metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The producer's value
    pub content: V,
    /// Instant at which the entry becomes stale
    pub expiration: DateTime<Utc>,
    /// Times this entry has been served, including the initial store
    pub hit_count: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a freshly stored entry with a hit count of 1.
    ///
    /// # Arguments
    /// * `content` - The value returned by the producer
    /// * `expiration` - Absolute instant after which the entry is stale
    pub fn new(content: V, expiration: DateTime<Utc>) -> Self {
        Self {
            content,
            expiration,
            hit_count: 1,
        }
    }

    // == Is Fresh ==
    /// Checks whether the entry can still be served at `now`.
    ///
    /// Boundary condition: the comparison is strict. At exactly
    /// `expiration` the entry is stale.
    pub fn is_fresh_at(&self, now: DateTime<Utc>) -> bool {
        self.expiration > now
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hit_count += 1;
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_entry_creation() {
        let now = Utc::now();
        let entry = CacheEntry::new("<html>A</html>".to_string(), now + Duration::seconds(10));

        assert_eq!(entry.content, "<html>A</html>");
        assert_eq!(entry.hit_count, 1);
        assert!(entry.is_fresh_at(now));
    }

    #[test]
    fn test_entry_stale_after_expiration() {
        let now = Utc::now();
        let entry = CacheEntry::new("value", now + Duration::seconds(10));

        assert!(!entry.is_fresh_at(now + Duration::seconds(11)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let entry = CacheEntry::new("value", now);

        // Entry is stale at exactly its expiration instant
        assert!(!entry.is_fresh_at(now), "Entry should be stale at boundary");
        assert!(entry.is_fresh_at(now - Duration::milliseconds(1)));
    }

    #[test]
    fn test_record_hit() {
        let mut entry = CacheEntry::new(42, Utc::now());
        entry.record_hit();
        entry.record_hit();
        assert_eq!(entry.hit_count, 3);
    }
}
