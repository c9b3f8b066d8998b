//! Column-selector popover: a checkbox per schema column.

use crate::html::escape;
use datagrid_core::{Schema, VisibleColumns};
use serde::{Deserialize, Serialize};

/// The column-visibility popover. A checkbox list over the whole schema;
/// the sole remaining visible column renders disabled because hiding it
/// is a no-op.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSelector {
    entries: Vec<SelectorEntry>,
    open: bool,
}

/// One row of the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SelectorEntry {
    key: String,
    title: String,
    checked: bool,
}

impl ColumnSelector {
    /// Build the selector from the schema and the current visibility set.
    #[must_use]
    pub fn new(schema: &Schema, visible: &VisibleColumns) -> Self {
        let entries = schema
            .columns()
            .iter()
            .map(|column| SelectorEntry {
                key: column.key().to_string(),
                title: column.title().to_string(),
                checked: visible.contains(column.key()),
            })
            .collect();
        Self {
            entries,
            open: false,
        }
    }

    /// Set whether the popover is open.
    #[must_use]
    pub const fn open(mut self, open: bool) -> Self {
        self.open = open;
        self
    }

    /// Render the popover.
    #[must_use]
    pub fn to_html(&self) -> String {
        let checked_count = self.entries.iter().filter(|e| e.checked).count();
        let hidden = if self.open { "" } else { " hidden" };
        let mut html = format!(
            r#"<div class="datagrid-column-selector" role="menu" aria-label="Visible columns"{hidden}>"#
        );
        for entry in &self.entries {
            let checked = if entry.checked { " checked" } else { "" };
            // the sole visible column cannot be hidden
            let disabled = if entry.checked && checked_count == 1 {
                " disabled"
            } else {
                ""
            };
            html.push_str(&format!(
                r#"<label class="datagrid-column-option"><input type="checkbox" value="{}" data-action="toggle-column"{checked}{disabled}/> {}</label>"#,
                escape(&entry.key),
                escape(&entry.title),
            ));
        }
        html.push_str("</div>");
        html
    }

    /// Component styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        concat!(
            ".datagrid-column-selector { position: absolute; right: 16px; padding: 8px; border: 1px solid #d1d5db; border-radius: 6px; background: #fff; box-shadow: 0 4px 12px rgba(0,0,0,0.08); }\n",
            ".datagrid-column-option { display: flex; align-items: center; gap: 6px; padding: 4px 8px; cursor: pointer; }\n",
        )
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datagrid_core::Column;

    fn schema() -> Schema {
        Schema::new(vec![
            Column::new("id", "ID"),
            Column::new("name", "Name"),
            Column::new("city", "City"),
        ])
        .expect("valid schema")
    }

    #[test]
    fn test_selector_lists_every_schema_column() {
        let schema = schema();
        let visible = VisibleColumns::all(&schema);
        let html = ColumnSelector::new(&schema, &visible).to_html();
        assert!(html.contains("value=\"id\""));
        assert!(html.contains("value=\"name\""));
        assert!(html.contains("value=\"city\""));
        assert_eq!(html.matches("checked").count(), 3);
    }

    #[test]
    fn test_selector_reflects_hidden_columns() {
        let schema = schema();
        let mut visible = VisibleColumns::all(&schema);
        visible.toggle("city");
        let html = ColumnSelector::new(&schema, &visible).to_html();
        // city stays listed but unchecked
        assert!(html.contains("value=\"city\""));
        assert_eq!(html.matches("checked").count(), 2);
    }

    #[test]
    fn test_sole_visible_column_is_disabled() {
        let schema = schema();
        let mut visible = VisibleColumns::all(&schema);
        visible.toggle("name");
        visible.toggle("city");
        let html = ColumnSelector::new(&schema, &visible).to_html();
        assert_eq!(html.matches("disabled").count(), 1);
    }

    #[test]
    fn test_closed_selector_is_hidden() {
        let schema = schema();
        let visible = VisibleColumns::all(&schema);
        let closed = ColumnSelector::new(&schema, &visible).to_html();
        assert!(closed.contains(" hidden"));
        let open = ColumnSelector::new(&schema, &visible).open(true).to_html();
        assert!(!open.contains(" hidden"));
    }

    #[test]
    fn test_titles_escaped() {
        let schema = Schema::new(vec![Column::new("a", "<A & B>")]).expect("valid schema");
        let visible = VisibleColumns::all(&schema);
        let html = ColumnSelector::new(&schema, &visible).to_html();
        assert!(html.contains("&lt;A &amp; B&gt;"));
    }
}
