//! TTL Memoizer Module
//!
//! Wraps a single-argument producer and serves its results from an in-memory
//! store until they go stale.

use std::collections::hash_map::{Entry, HashMap};
use std::fmt;
use std::future::Future;
use std::hash::Hash;

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::cache::{CacheEntry, CacheStats, Clock, SystemClock};
use crate::error::{CacheError, Result};

// == Producer ==
/// A single-argument operation whose results can be memoized.
pub trait Producer {
    /// Input argument, also used as the cache key
    type Key;
    /// Value produced on success
    type Value;
    /// Failure surfaced verbatim to the memoizer's caller
    type Error;

    /// Computes the value for `key`.
    fn produce(
        &self,
        key: &Self::Key,
    ) -> impl Future<Output = std::result::Result<Self::Value, Self::Error>> + Send;
}

// == TTL Memoizer ==
/// Time-bounded memoizing cache around a [`Producer`].
///
/// Each instance owns its store. Calls take `&mut self`, so the
/// check-then-fetch-then-store sequence runs for one caller at a time.
pub struct TtlMemoizer<P: Producer, C = SystemClock> {
    /// The wrapped operation
    producer: P,
    /// Key to memoized entry
    entries: HashMap<P::Key, CacheEntry<P::Value>>,
    /// Time source for freshness checks
    clock: C,
    /// How long a stored entry stays fresh
    ttl: chrono::Duration,
    /// Performance statistics
    stats: CacheStats,
}

impl<P: Producer> TtlMemoizer<P, SystemClock> {
    // == Constructor ==
    /// Creates a memoizer reading the system clock.
    ///
    /// # Arguments
    /// * `producer` - The operation to memoize
    /// * `ttl` - How long results stay fresh, must be non-zero
    pub fn new(producer: P, ttl: std::time::Duration) -> Result<Self> {
        Self::with_clock(producer, ttl, SystemClock)
    }
}

impl<P: Producer, C: Clock> TtlMemoizer<P, C> {
    /// Creates a memoizer with an injected clock.
    pub fn with_clock(producer: P, ttl: std::time::Duration, clock: C) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidTtl("TTL must be greater than zero".to_string()));
        }
        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| CacheError::InvalidTtl(format!("TTL out of range: {}", e)))?;
        if clock.now().checked_add_signed(ttl).is_none() {
            return Err(CacheError::InvalidTtl(
                "TTL overflows the representable date range".to_string(),
            ));
        }

        Ok(Self {
            producer,
            entries: HashMap::new(),
            clock,
            ttl,
            stats: CacheStats::new(),
        })
    }

    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the store, fresh or stale.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if nothing has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P, C> TtlMemoizer<P, C>
where
    P: Producer,
    P::Key: Hash + Eq + fmt::Debug,
    C: Clock,
{
    // == Get ==
    /// Returns the value for `key`, calling the producer only when no fresh
    /// entry exists.
    ///
    /// Producer failures are returned unchanged and leave the store as it
    /// was.
    pub async fn get(&mut self, key: P::Key) -> std::result::Result<P::Value, P::Error>
    where
        P::Value: Clone,
    {
        self.lookup(key).await.map(|entry| entry.content.clone())
    }

    // == Lookup ==
    /// Same as [`get`](Self::get), but returns the entry that served the call.
    ///
    /// On a hit the entry's hit count has already been incremented. On a
    /// miss the returned entry is the newly stored one.
    pub async fn lookup(
        &mut self,
        key: P::Key,
    ) -> std::result::Result<&CacheEntry<P::Value>, P::Error> {
        let now = self.clock.now();

        match self.entries.entry(key) {
            Entry::Occupied(mut slot) if slot.get().is_fresh_at(now) => {
                slot.get_mut().record_hit();
                self.stats.record_hit();
                debug!(
                    key = ?slot.key(),
                    hit_count = slot.get().hit_count,
                    "cache hit"
                );
                Ok(&*slot.into_mut())
            }
            slot => {
                self.stats.record_miss();
                debug!(key = ?slot.key(), "cache miss, invoking producer");

                let content = match self.producer.produce(slot.key()).await {
                    Ok(content) => content,
                    Err(err) => {
                        self.stats.record_failure();
                        warn!(key = ?slot.key(), "producer failed, store left unchanged");
                        return Err(err);
                    }
                };

                // Saturates if the clock has since moved close to the end of time
                let expiration = self
                    .clock
                    .now()
                    .checked_add_signed(self.ttl)
                    .unwrap_or(DateTime::<Utc>::MAX_UTC);
                let fresh = CacheEntry::new(content, expiration);
                let stored = match slot {
                    Entry::Occupied(mut stale) => {
                        stale.insert(fresh);
                        stale.into_mut()
                    }
                    Entry::Vacant(vacant) => vacant.insert(fresh),
                };
                Ok(&*stored)
            }
        }
    }

    // == Peek ==
    /// Returns the stored entry for `key`, fresh or stale, without touching
    /// any counter.
    pub fn entry(&self, key: &P::Key) -> Option<&CacheEntry<P::Value>> {
        self.entries.get(key)
    }

    /// Returns the hit count of the stored entry for `key`.
    pub fn hit_count(&self, key: &P::Key) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.hit_count)
    }
}

impl<P, C> fmt::Debug for TtlMemoizer<P, C>
where
    P: Producer,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TtlMemoizer")
            .field("ttl", &self.ttl)
            .field("entries", &self.entries.len())
            .field("stats", &self.stats)
            .finish()
    }
}
