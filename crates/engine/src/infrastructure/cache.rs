//! TTL-based cache for short-lived per-player state.
//!
//! Expiry is measured against the injected clock, so tests can step time
//! instead of sleeping.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::infrastructure::ports::ClockPort;

/// A thread-safe set of keys that each expire `ttl` after insertion.
///
/// Expired keys are dropped by the next `insert_if_absent()`.
pub struct TtlCache<K> {
    inserted_at: RwLock<HashMap<K, DateTime<Utc>>>,
    ttl: Duration,
    clock: Arc<dyn ClockPort>,
}

impl<K> TtlCache<K>
where
    K: Eq + Hash + Send + Sync,
{
    /// Create a new cache with the given TTL.
    pub fn new(ttl: Duration, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            inserted_at: RwLock::new(HashMap::new()),
            ttl,
            clock,
        }
    }

    /// Insert unless a live entry already exists. Returns true if inserted.
    ///
    /// Check and insert happen under one write lock.
    pub async fn insert_if_absent(&self, key: K) -> bool {
        let now = self.clock.now();
        let mut guard = self.inserted_at.write().await;
        guard.retain(|_, at| now - *at < self.ttl);
        if guard.contains_key(&key) {
            return false;
        }
        guard.insert(key, now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::ManualClock;

    fn cache(clock: Arc<ManualClock>) -> TtlCache<String> {
        TtlCache::new(Duration::milliseconds(50), clock)
    }

    fn clock() -> Arc<ManualClock> {
        Arc::new(ManualClock::new(Utc::now()))
    }

    #[tokio::test]
    async fn second_insert_within_ttl_is_refused() {
        let clock = clock();
        let cache = cache(clock.clone());
        assert!(cache.insert_if_absent("p".into()).await);
        clock.advance(Duration::milliseconds(49));
        assert!(!cache.insert_if_absent("p".into()).await);
    }

    #[tokio::test]
    async fn insert_allowed_again_after_expiry() {
        let clock = clock();
        let cache = cache(clock.clone());
        assert!(cache.insert_if_absent("p".into()).await);
        clock.advance(Duration::milliseconds(50));
        assert!(cache.insert_if_absent("p".into()).await);
        assert!(!cache.insert_if_absent("p".into()).await);
    }

    #[tokio::test]
    async fn keys_are_independent() {
        let clock = clock();
        let cache = cache(clock.clone());
        assert!(cache.insert_if_absent("a".into()).await);
        assert!(cache.insert_if_absent("b".into()).await);
    }

    #[tokio::test]
    async fn expired_keys_are_dropped_on_insert() {
        let clock = clock();
        let cache = cache(clock.clone());
        cache.insert_if_absent("a".into()).await;
        cache.insert_if_absent("b".into()).await;
        clock.advance(Duration::milliseconds(60));
        cache.insert_if_absent("c".into()).await;
        assert_eq!(cache.inserted_at.read().await.len(), 1);
    }

    #[tokio::test]
    async fn reads_clock_once_per_insert() {
        let start = Utc::now();
        let mut mock = crate::infrastructure::ports::MockClockPort::new();
        mock.expect_now().times(2).returning(move || start);
        let cache: TtlCache<&str> = TtlCache::new(Duration::milliseconds(50), Arc::new(mock));

        assert!(cache.insert_if_absent("a").await);
        assert!(!cache.insert_if_absent("a").await);
    }
}
