//! Record type and the JSON data boundary.

use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

const NULL: Value = Value::Null;

/// A row of data: an opaque mapping from field key to value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    cells: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field value.
    #[must_use]
    pub fn field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.cells.insert(key.into(), value.into());
        self
    }

    /// Get a field value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.cells.get(key)
    }

    /// Get a field value, treating missing fields as null.
    #[must_use]
    pub fn value_or_null(&self, key: &str) -> &Value {
        self.cells.get(key).unwrap_or(&NULL)
    }

    /// Number of fields present.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Convert arbitrary JSON into a record sequence.
///
/// Anything other than an array coerces to an empty sequence rather than
/// failing; array elements that are not objects become empty records, so
/// every field lookup on them is null.
#[must_use]
pub fn records_from_json(json: &serde_json::Value) -> Vec<Record> {
    let Some(items) = json.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .map(|item| {
            item.as_object().map_or_else(Record::new, |fields| {
                let cells = fields
                    .iter()
                    .map(|(k, v)| (k.clone(), Value::from_json(v)))
                    .collect();
                Record { cells }
            })
        })
        .collect()
}
