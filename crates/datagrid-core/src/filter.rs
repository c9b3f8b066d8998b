//! Substring filter stage.

use crate::record::Record;
use crate::visibility::VisibleColumns;
use std::borrow::Cow;

/// Filter records by a case-insensitive substring search, scoped to the
/// currently visible columns.
///
/// An empty search term returns the input unchanged (borrowed, no copy).
/// Otherwise a record survives when at least one of its values under a
/// visible key is non-null and its display form contains the term. Values
/// in hidden columns never match.
#[must_use]
pub fn filter<'a>(
    records: &'a [Record],
    search_term: &str,
    visible: &VisibleColumns,
) -> Cow<'a, [Record]> {
    if search_term.is_empty() {
        return Cow::Borrowed(records);
    }
    let needle = search_term.to_lowercase();
    Cow::Owned(
        records
            .iter()
            .filter(|record| matches(record, &needle, visible))
            .cloned()
            .collect(),
    )
}

fn matches(record: &Record, needle: &str, visible: &VisibleColumns) -> bool {
    visible.keys().any(|key| {
        record.get(key).is_some_and(|value| {
            !value.is_null() && value.display().to_lowercase().contains(needle)
        })
    })
}
