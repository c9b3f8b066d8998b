//! Browser-backed preference storage.
//!
//! Persists grid preferences in `localStorage` (or `sessionStorage`) when
//! the environment has one. Non-WASM builds fall back to an in-memory map
//! so the same code paths run in tests and native hosts. Environments
//! without storage (e.g. non-interactive rendering contexts) skip
//! persistence entirely and the grid degrades to computed defaults.

use datagrid_core::{PreferenceStore, StoreError};

#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

/// Which browser store backs the preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageScope {
    /// `localStorage` - persists across browser sessions
    #[default]
    Local,
    /// `sessionStorage` - cleared when the tab closes
    Session,
}

/// A [`PreferenceStore`] over browser storage.
#[derive(Debug)]
pub struct BrowserStore {
    scope: StorageScope,
    /// In-memory fallback for non-WASM environments
    #[cfg(not(target_arch = "wasm32"))]
    memory: Mutex<HashMap<String, String>>,
}

impl Default for BrowserStore {
    fn default() -> Self {
        Self::new(StorageScope::Local)
    }
}

impl BrowserStore {
    /// Create a store over the given scope.
    #[must_use]
    pub fn new(scope: StorageScope) -> Self {
        Self {
            scope,
            #[cfg(not(target_arch = "wasm32"))]
            memory: Mutex::new(HashMap::new()),
        }
    }

    /// Create a `localStorage`-backed store.
    #[must_use]
    pub fn local() -> Self {
        Self::new(StorageScope::Local)
    }

    /// Create a `sessionStorage`-backed store.
    #[must_use]
    pub fn session() -> Self {
        Self::new(StorageScope::Session)
    }

    /// The backing scope.
    #[must_use]
    pub const fn scope(&self) -> StorageScope {
        self.scope
    }

    #[cfg(target_arch = "wasm32")]
    fn backing(&self) -> Option<web_sys::Storage> {
        let window = web_sys::window()?;
        match self.scope {
            StorageScope::Local => window.local_storage().ok()?,
            StorageScope::Session => window.session_storage().ok()?,
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            self.backing()?.get_item(key).ok()?
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory.lock().ok()?.get(key).cloned()
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(target_arch = "wasm32")]
        {
            // no storage in this environment: skip persistence, not an error
            self.backing().map_or(Ok(()), |storage| {
                storage
                    .set_item(key, value)
                    .map_err(|_| StoreError::Unavailable)
            })
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.memory
                .lock()
                .map_err(|_| StoreError::Unavailable)?
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scope_is_local() {
        assert_eq!(BrowserStore::default().scope(), StorageScope::Local);
        assert_eq!(BrowserStore::session().scope(), StorageScope::Session);
    }

    #[test]
    fn test_round_trip() {
        let store = BrowserStore::local();
        assert_eq!(store.get("k"), None);
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k"), Some("v".to_string()));
    }

    #[test]
    fn test_overwrite_is_last_write_wins() {
        let store = BrowserStore::local();
        store.set("k", "one").expect("set");
        store.set("k", "two").expect("set");
        assert_eq!(store.get("k"), Some("two".to_string()));
    }

    #[test]
    fn test_works_as_grid_store() {
        use datagrid_core::{Column, Schema, TableState};

        let schema = Schema::new(vec![Column::new("a", "A"), Column::new("b", "B")])
            .expect("valid schema");
        let mut table =
            TableState::new(schema, "wired").store(Box::new(BrowserStore::local()));
        table.toggle_column("b");
        assert_eq!(table.visible_columns().len(), 1);
    }
}
