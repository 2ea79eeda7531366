//! Session-scoped TTL cache for rendered weather fragments.
//!
//! One cache slot per coordinate pair: a rendered fragment under
//! `weatherCache_<lat>_<lon>` and its fetch timestamp under
//! `weatherCacheTime_<lat>_<lon>`. Entries are invalidated purely by
//! elapsed time and overwritten on every fetch, successful or not.

use std::sync::Arc;

use glance_core::store::{get_json, set_json, SessionStore};

/// Maximum age of a cached fragment, in milliseconds (10 minutes).
pub const CACHE_TTL_MS: i64 = 600_000;

/// Storage keys for a coordinate pair: (fragment key, timestamp key).
pub fn cache_keys(latitude: f64, longitude: f64) -> (String, String) {
    (
        format!("weatherCache_{}_{}", latitude, longitude),
        format!("weatherCacheTime_{}_{}", latitude, longitude),
    )
}

/// A cached fragment together with its fetch timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedFragment {
    pub html: String,
    pub fetched_at_ms: i64,
}

impl CachedFragment {
    /// True while the entry is younger than [`CACHE_TTL_MS`].
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.fetched_at_ms < CACHE_TTL_MS
    }
}

/// TTL cache over the injected session store.
pub struct WeatherCache {
    store: Arc<dyn SessionStore>,
    fragment_key: String,
    time_key: String,
}

impl WeatherCache {
    pub fn new(store: Arc<dyn SessionStore>, latitude: f64, longitude: f64) -> Self {
        let (fragment_key, time_key) = cache_keys(latitude, longitude);
        Self {
            store,
            fragment_key,
            time_key,
        }
    }

    /// Read the cached fragment, if one exists.
    ///
    /// A fragment with a missing or unparsable timestamp is returned with
    /// timestamp 0, which any realistic freshness check treats as stale.
    pub fn get(&self) -> Option<CachedFragment> {
        let html: String = get_json(self.store.as_ref(), &self.fragment_key)?;
        let fetched_at_ms = get_json(self.store.as_ref(), &self.time_key).unwrap_or(0);
        Some(CachedFragment {
            html,
            fetched_at_ms,
        })
    }

    /// Store a fragment with its fetch timestamp, overwriting any previous
    /// entry.
    pub fn put(&self, html: &str, now_ms: i64) {
        set_json(self.store.as_ref(), &self.fragment_key, &html);
        set_json(self.store.as_ref(), &self.time_key, &now_ms);
    }
}
