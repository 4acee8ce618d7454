//! Query Cache
//!
//! Caches query results by key. A cached result is served while it is
//! fresh; invalidation or age past `stale_time` makes the next read
//! re-fetch.

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use tracing::debug;

/// Logical name a query is cached under.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(String);

impl QueryKey {
    /// Creates a key from any name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key the random numbers list is cached under.
    pub fn random_numbers() -> Self {
        Self::new("randomNumbers")
    }

    /// The key name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Render-facing status of a query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryState<T> {
    /// Never fetched
    Pending,
    /// Last fetch failed; carries the error text
    Error(String),
    /// Last fetch succeeded
    Success(T),
}

#[derive(Debug)]
struct CacheEntry<T> {
    state: QueryState<T>,
    updated_at: Instant,
    invalidated: bool,
    /// Bumped by every invalidation
    generation: u64,
}

impl<T> CacheEntry<T> {
    fn pending() -> Self {
        Self {
            state: QueryState::Pending,
            updated_at: Instant::now(),
            invalidated: false,
            generation: 0,
        }
    }

    fn is_fresh(&self, stale_time: Duration) -> bool {
        matches!(self.state, QueryState::Success(_))
            && !self.invalidated
            && self.updated_at.elapsed() < stale_time
    }
}

/// Keyed cache of query results.
#[derive(Debug)]
pub struct QueryCache<T> {
    entries: RwLock<HashMap<QueryKey, CacheEntry<T>>>,
    stale_time: Duration,
}

impl<T: Clone> QueryCache<T> {
    /// Creates an empty cache whose results stay fresh for `stale_time`.
    pub fn new(stale_time: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            stale_time,
        }
    }

    /// Returns the cached data for `key` if fresh, otherwise runs `fetcher`
    /// and stores its outcome.
    ///
    /// A failed fetch is stored as `QueryState::Error` and returned; it is
    /// not retried. An invalidation that lands while the fetcher runs leaves
    /// the stored result stale.
    pub async fn fetch<F, Fut, E>(&self, key: &QueryKey, fetcher: F) -> Result<T, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: fmt::Display,
    {
        if let Some(data) = self.fresh_data(key).await {
            debug!("Query '{}' served from cache", key);
            return Ok(data);
        }

        let started = self
            .entries
            .read()
            .await
            .get(key)
            .map_or(0, |entry| entry.generation);

        debug!("Query '{}' fetching", key);
        let result = fetcher().await;

        let state = match &result {
            Ok(data) => QueryState::Success(data.clone()),
            Err(err) => QueryState::Error(err.to_string()),
        };
        let mut entries = self.entries.write().await;
        let entry = entries.entry(key.clone()).or_insert_with(CacheEntry::pending);
        entry.state = state;
        entry.updated_at = Instant::now();
        entry.invalidated = entry.generation != started;
        if entry.invalidated {
            debug!("Query '{}' invalidated during fetch", key);
        }

        result
    }

    /// Current status of the query under `key`.
    pub async fn state(&self, key: &QueryKey) -> QueryState<T> {
        self.entries
            .read()
            .await
            .get(key)
            .map(|entry| entry.state.clone())
            .unwrap_or(QueryState::Pending)
    }

    /// Marks the entry under `key` stale; the next `fetch` re-runs its fetcher.
    ///
    /// The last data stays visible through `state` until then. A fetch already
    /// in flight still stores its result, but that result starts out stale.
    pub async fn invalidate(&self, key: &QueryKey) {
        let mut entries = self.entries.write().await;
        let entry = entries.entry(key.clone()).or_insert_with(CacheEntry::pending);
        entry.generation += 1;
        entry.invalidated = true;
        debug!("Query '{}' invalidated", key);
    }

    /// Returns true when the next `fetch` for `key` would hit the fetcher.
    pub async fn is_stale(&self, key: &QueryKey) -> bool {
        self.fresh_data(key).await.is_none()
    }

    async fn fresh_data(&self, key: &QueryKey) -> Option<T> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if !entry.is_fresh(self.stale_time) {
            return None;
        }
        match &entry.state {
            QueryState::Success(data) => Some(data.clone()),
            _ => None,
        }
    }
}
