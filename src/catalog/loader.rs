//! Lazy, cached access to section data sets.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::task;
use tracing::{debug, info, warn};

use super::{CatalogError, CatalogRecord, DataSet, EmbeddedSource, SectionSource};

/// Resolves section keys to their data sets.
///
/// Each section's source is read at most once per loader; later calls return
/// the same `Arc` instance. The loader also tracks which sections have a load
/// outstanding so loading indicators can be driven from it.
///
/// One loader is constructed at startup and shared (typically behind an
/// `Arc`) by everything that needs catalog data.
pub struct CatalogLoader<S = EmbeddedSource> {
    source: S,
    cache: Mutex<HashMap<String, DataSet>>,
    /// Outstanding load count per section key
    in_flight: Mutex<HashMap<String, usize>>,
}

impl CatalogLoader<EmbeddedSource> {
    /// Creates a loader over the embedded content.
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedSource)
    }
}

impl Default for CatalogLoader<EmbeddedSource> {
    fn default() -> Self {
        Self::embedded()
    }
}

impl<S: SectionSource> CatalogLoader<S> {
    /// Creates a loader over an arbitrary source.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: Mutex::new(HashMap::new()),
            in_flight: Mutex::new(HashMap::new()),
        }
    }

    /// Loads the data set for `key`.
    ///
    /// A cached data set is returned without touching the loading state.
    /// Otherwise the key is marked in-flight, the task yields once, the
    /// source is read and the result cached. The in-flight mark is removed
    /// however the load ends, including when the future is dropped.
    pub async fn load(&self, key: &str) -> Result<DataSet, CatalogError> {
        if let Some(cached) = self.cached(key) {
            debug!(section = key, "catalog cache hit");
            return Ok(cached);
        }

        let _in_flight = InFlight::mark(&self.in_flight, key);
        task::yield_now().await;

        let records = self.source.read(key).inspect_err(|err| {
            warn!(section = key, error = %err, "failed to load catalog section");
        })?;

        for id in duplicate_ids(&records) {
            warn!(section = key, id, "duplicate record id; lookups return the first match");
        }

        let loaded: DataSet = Arc::from(records);
        let mut cache = lock(&self.cache);
        // A concurrent load may have finished first; keep the stored instance
        let data_set = Arc::clone(cache.entry(key.to_string()).or_insert(loaded));
        info!(section = key, records = data_set.len(), "catalog section loaded");
        Ok(data_set)
    }

    /// Loads `key`, degrading any failure to an empty data set.
    ///
    /// The failure is logged by [`load`](Self::load); callers only see an
    /// empty list.
    pub async fn load_or_empty(&self, key: &str) -> DataSet {
        self.load(key).await.unwrap_or_else(|_| empty_data_set())
    }

    /// Returns true while a load for `key` has not settled.
    #[must_use]
    pub fn is_loading(&self, key: &str) -> bool {
        lock(&self.in_flight).get(key).is_some_and(|count| *count > 0)
    }

    /// Returns the cached data set for `key` without loading it.
    #[must_use]
    pub fn cached(&self, key: &str) -> Option<DataSet> {
        lock(&self.cache).get(key).cloned()
    }

    /// Number of sections currently cached.
    #[must_use]
    pub fn cached_count(&self) -> usize {
        lock(&self.cache).len()
    }
}

/// Returns an empty data set.
#[must_use]
pub fn empty_data_set() -> DataSet {
    Arc::from(Vec::<CatalogRecord>::new())
}

/// Ids that occur more than once, in order of their second occurrence.
fn duplicate_ids(records: &[CatalogRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();
    records
        .iter()
        .map(|record| record.id.as_str())
        .filter(|id| !seen.insert(*id))
        .collect()
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    // The maps stay consistent even if a holder panicked
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Marks a section in-flight for as long as the guard lives.
struct InFlight<'a> {
    map: &'a Mutex<HashMap<String, usize>>,
    key: String,
}

impl<'a> InFlight<'a> {
    fn mark(map: &'a Mutex<HashMap<String, usize>>, key: &str) -> Self {
        *lock(map).entry(key.to_string()).or_insert(0) += 1;
        Self {
            map,
            key: key.to_string(),
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let mut map = lock(self.map);
        if let Some(count) = map.get_mut(&self.key) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                map.remove(&self.key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{poll_fn, Future};
    use std::pin::pin;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::task::Poll;

    /// Source that counts reads and serves a fixed section.
    #[derive(Default)]
    struct CountingSource {
        reads: AtomicUsize,
    }

    impl SectionSource for CountingSource {
        fn read(&self, key: &str) -> Result<Vec<CatalogRecord>, CatalogError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            match key {
                "letters" => Ok(vec![
                    CatalogRecord::new("a", "A", "Vowel", "a", "a"),
                    CatalogRecord::new("b", "B", "Consonant", "b", "b"),
                ]),
                _ => Err(CatalogError::UnknownSection {
                    key: key.to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_second_load_reuses_cached_instance() {
        let loader = CatalogLoader::new(CountingSource::default());
        let first = loader.load("letters").await.unwrap();
        let second = loader.load("letters").await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loader.source.reads.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_unknown_key_leaves_cache_empty() {
        let loader = CatalogLoader::new(CountingSource::default());
        let err = loader.load("missing").await.unwrap_err();
        assert!(matches!(err, CatalogError::UnknownSection { .. }));
        assert_eq!(loader.cached_count(), 0);
        assert!(!loader.is_loading("missing"));
    }

    #[tokio::test]
    async fn test_in_flight_flag_while_pending() {
        let loader = CatalogLoader::new(CountingSource::default());
        assert!(!loader.is_loading("letters"));

        let mut pending = pin!(loader.load("letters"));
        let first_poll = poll_fn(|cx| Poll::Ready(pending.as_mut().poll(cx))).await;
        assert!(first_poll.is_pending());
        assert!(loader.is_loading("letters"));

        let data = pending.await.unwrap();
        assert_eq!(data.len(), 2);
        assert!(!loader.is_loading("letters"));
    }

    #[tokio::test]
    async fn test_dropped_load_clears_flag() {
        let loader = CatalogLoader::new(CountingSource::default());
        {
            let mut pending = Box::pin(loader.load("letters"));
            let first_poll = poll_fn(|cx| Poll::Ready(pending.as_mut().poll(cx))).await;
            assert!(first_poll.is_pending());
            assert!(loader.is_loading("letters"));
        }
        assert!(!loader.is_loading("letters"));
        assert!(loader.cached("letters").is_none());
    }

    #[tokio::test]
    async fn test_load_or_empty_degrades() {
        let loader = CatalogLoader::new(CountingSource::default());
        let data = loader.load_or_empty("missing").await;
        assert!(data.is_empty());
        assert!(!loader.is_loading("missing"));
    }

    #[test]
    fn test_duplicate_ids() {
        let records = vec![
            CatalogRecord::new("a", "A", "C", "", ""),
            CatalogRecord::new("b", "B", "C", "", ""),
            CatalogRecord::new("a", "A2", "C", "", ""),
        ];
        assert_eq!(duplicate_ids(&records), vec!["a"]);
    }
}
