//! Column visibility state.

use crate::column::Schema;
use std::collections::BTreeSet;

/// The set of currently visible column keys.
///
/// Invariant: never empty. The last visible column cannot be hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleColumns {
    keys: BTreeSet<String>,
}

impl VisibleColumns {
    /// All schema columns visible.
    #[must_use]
    pub fn all(schema: &Schema) -> Self {
        Self {
            keys: schema.keys().map(ToString::to_string).collect(),
        }
    }

    /// Restore a persisted set against the current schema.
    ///
    /// Keys no longer present in the schema are dropped; if nothing
    /// survives, the set falls back to all columns so the non-empty
    /// invariant holds.
    #[must_use]
    pub fn from_persisted<I, S>(persisted: I, schema: &Schema) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keys: BTreeSet<String> = persisted
            .into_iter()
            .filter(|key| schema.contains(key.as_ref()))
            .map(|key| key.as_ref().to_string())
            .collect();
        if keys.is_empty() {
            Self::all(schema)
        } else {
            Self { keys }
        }
    }

    /// Toggle one column. Hiding the sole visible column is a no-op.
    ///
    /// Returns whether the set changed.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.contains(key) {
            if self.keys.len() > 1 {
                self.keys.remove(key);
                true
            } else {
                false
            }
        } else {
            self.keys.insert(key.to_string())
        }
    }

    /// Check whether a column is visible.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Iterate the visible keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Number of visible columns (always at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Always false; kept for symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// The keys as a plain list, for persistence.
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::Column;

    fn schema(keys: &[&str]) -> Schema {
        Schema::new(
            keys.iter()
                .map(|k| Column::new(*k, k.to_uppercase()))
                .collect(),
        )
        .expect("valid schema")
    }

    #[test]
    fn test_all_contains_every_schema_key() {
        let visible = VisibleColumns::all(&schema(&["a", "b", "c"]));
        assert_eq!(visible.len(), 3);
        assert!(visible.contains("b"));
    }

    #[test]
    fn test_toggle_hides_and_shows() {
        let mut visible = VisibleColumns::all(&schema(&["a", "b"]));
        assert!(visible.toggle("a"));
        assert!(!visible.contains("a"));
        assert!(visible.toggle("a"));
        assert!(visible.contains("a"));
    }

    #[test]
    fn test_toggle_sole_visible_column_is_noop() {
        let mut visible = VisibleColumns::all(&schema(&["a", "b"]));
        assert!(visible.toggle("a"));
        assert_eq!(visible.len(), 1);
        assert!(!visible.toggle("b"));
        assert!(visible.contains("b"));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_from_persisted_drops_stale_keys() {
        let visible = VisibleColumns::from_persisted(["a", "gone"], &schema(&["a", "b"]));
        assert!(visible.contains("a"));
        assert!(!visible.contains("gone"));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_from_persisted_all_stale_falls_back_to_all() {
        let visible = VisibleColumns::from_persisted(["x", "y"], &schema(&["a", "b"]));
        assert_eq!(visible.len(), 2);
        assert!(visible.contains("a"));
    }

    #[test]
    fn test_from_persisted_empty_falls_back_to_all() {
        let visible = VisibleColumns::from_persisted(Vec::<String>::new(), &schema(&["a"]));
        assert_eq!(visible.len(), 1);
    }

    #[test]
    fn test_to_vec_is_deterministic() {
        let visible = VisibleColumns::all(&schema(&["b", "a"]));
        assert_eq!(visible.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_never_empty_through_any_toggle_sequence() {
        let mut visible = VisibleColumns::all(&schema(&["a", "b", "c"]));
        for key in ["a", "b", "c", "a", "b", "c"] {
            visible.toggle(key);
            assert!(visible.len() >= 1);
        }
    }
}
