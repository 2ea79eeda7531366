//! Session-scoped key-value storage.
//!
//! Widgets that cache results do so through the [`SessionStore`] trait so
//! the backing store can be swapped for an in-memory map in tests. Values
//! are JSON-serialized strings; read and write failures degrade to
//! cache-miss / no-op rather than propagating.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;

/// String key-value store scoped to the lifetime of the session.
///
/// Single-key reads and writes are atomic; there is no cross-key
/// consistency.
pub trait SessionStore: Send + Sync {
    /// Retrieve the raw value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a raw value under a key, overwriting any previous value.
    fn set(&self, key: &str, value: String);
}

/// Retrieve and JSON-decode a stored value.
///
/// A missing key or an unparsable value yields `None`; parse failures are
/// logged, never propagated.
pub fn get_json<T: DeserializeOwned>(store: &dyn SessionStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!("Failed to parse stored value for key \"{}\": {}", key, e);
            None
        }
    }
}

/// JSON-encode and store a value. Serialization failures are logged and
/// swallowed.
pub fn set_json<T: Serialize>(store: &dyn SessionStore, key: &str, value: &T) {
    match serde_json::to_string(value) {
        Ok(raw) => store.set(key, raw),
        Err(e) => tracing::warn!("Failed to store value for key \"{}\": {}", key, e),
    }
}

/// In-memory session store. Lives as long as the process, which is the
/// session scope for this application.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        self.entries.lock().insert(key.to_string(), value);
    }
}
