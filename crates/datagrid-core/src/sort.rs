//! Single-key sort stage.

use crate::record::Record;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The active sort directive: one column key and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    /// Column key being sorted
    pub key: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortKey {
    /// Create an ascending directive for a key.
    #[must_use]
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// The directive produced by clicking `key` given the current
    /// directive: toggling the same ascending key flips to descending,
    /// anything else starts ascending.
    #[must_use]
    pub fn toggled(current: Option<&Self>, key: &str) -> Self {
        match current {
            Some(active) if active.key == key && active.direction == SortDirection::Ascending => {
                Self {
                    key: key.to_string(),
                    direction: SortDirection::Descending,
                }
            }
            _ => Self::ascending(key),
        }
    }
}

/// Sort records by the directive's raw field value.
///
/// `None` returns the input unchanged (borrowed). The sort is stable:
/// records with equal keys keep their relative input order. Missing
/// fields compare as null. The input is never mutated.
#[must_use]
pub fn sort<'a>(records: &'a [Record], directive: Option<&SortKey>) -> Cow<'a, [Record]> {
    let Some(directive) = directive else {
        return Cow::Borrowed(records);
    };
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = a
            .value_or_null(&directive.key)
            .natural_cmp(b.value_or_null(&directive.key));
        match directive.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    Cow::Owned(sorted)
}
