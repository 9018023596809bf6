use std::collections::HashMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};

use super::classify::classify;
use crate::clock::{Clock, SystemClock};
use crate::member::MemberStatus;

/// How long a memoized classification stays valid, in seconds.
pub const STATUS_CACHE_TTL_SECONDS: i64 = 60;

/// A memoized classification and when it was computed.
#[derive(Debug, Clone, Copy)]
struct CachedStatus {
    status: MemberStatus,
    computed_at: DateTime<Utc>,
}

/// Short-lived memo from expiry date to [`MemberStatus`].
///
/// Entries expire by age only. Expired entries are recomputed on lookup and
/// dropped in bulk by [`StatusCache::purge_expired`].
#[derive(Debug)]
pub struct StatusCache<C: Clock = SystemClock> {
    clock: C,
    ttl: Duration,
    entries: HashMap<NaiveDate, CachedStatus>,
}

impl StatusCache<SystemClock> {
    /// Creates a cache backed by the wall clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for StatusCache<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StatusCache<C> {
    /// Creates a cache reading time from `clock`, with the default TTL.
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            ttl: Duration::seconds(STATUS_CACHE_TTL_SECONDS),
            entries: HashMap::new(),
        }
    }

    /// Overrides the TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// The clock this cache reads.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Returns the status for `expiry`, computing and memoizing it when no
    /// fresh entry exists.
    pub fn status(&mut self, expiry: NaiveDate) -> MemberStatus {
        let now = self.clock.now();
        if let Some(cached) = self.entries.get(&expiry) {
            if now - cached.computed_at < self.ttl {
                return cached.status;
            }
        }

        let status = classify(expiry, now);
        self.entries.insert(
            expiry,
            CachedStatus {
                status,
                computed_at: now,
            },
        );
        status
    }

    /// Drops every entry at least one TTL old. Returns how many were dropped.
    pub fn purge_expired(&mut self) -> usize {
        let now = self.clock.now();
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, cached| now - cached.computed_at < ttl);
        before - self.entries.len()
    }

    /// Number of memoized entries, fresh or not.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is memoized.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forgets every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
