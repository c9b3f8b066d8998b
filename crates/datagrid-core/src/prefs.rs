//! Preference store capability and the visibility preference format.
//!
//! The grid's only durable state is the per-table visible-column set.
//! Storage is an injected capability so hosts can back it with whatever
//! key/value store the environment offers, or nothing at all.

use crate::visibility::VisibleColumns;
use std::collections::HashMap;
use std::fmt;
use std::sync::Mutex;

/// A durable string key/value store.
///
/// Implementations must degrade rather than fail: `get` answers `None`
/// when the store is unavailable, and a failed `set` reports an error
/// the grid ignores.
pub trait PreferenceStore: Send + Sync {
    /// Read a value.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Error writing to a preference store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store is not available in this environment
    Unavailable,
    /// The payload could not be encoded
    Serialization(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => write!(f, "preference store not available"),
            Self::Serialization(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// In-memory store, mutex-guarded. The default for non-browser hosts
/// and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::Unavailable)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store for environments without persistence: reads nothing, writes
/// nowhere, never errors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStore;

impl PreferenceStore for NullStore {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }
}

/// The preference key holding a table's visible-column set.
#[must_use]
pub fn visibility_key(table_id: &str) -> String {
    format!("{table_id}-visible-columns")
}

/// Load the persisted visible-column list for a table. Unreadable or
/// malformed payloads answer `None`, as if nothing was persisted.
#[must_use]
pub fn load_visibility(store: &dyn PreferenceStore, table_id: &str) -> Option<Vec<String>> {
    let raw = store.get(&visibility_key(table_id))?;
    serde_json::from_str(&raw).ok()
}

/// Persist a table's visible-column set as a JSON array.
pub fn save_visibility(
    store: &dyn PreferenceStore,
    table_id: &str,
    visible: &VisibleColumns,
) -> Result<(), StoreError> {
    let payload = serde_json::to_string(&visible.to_vec())
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    store.set(&visibility_key(table_id), &payload)
}
