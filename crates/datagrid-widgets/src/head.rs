//! Header row: column titles with sort affordances.

use crate::html::escape;
use datagrid_core::{Column, SortDirection, SortKey};
use serde::{Deserialize, Serialize};

/// The `<thead>` row over the visible columns. Sortable columns get a
/// click affordance; the active sort column announces its direction via
/// `aria-sort` and an arrow glyph.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeadRow {
    cells: Vec<HeadCell>,
    sort: Option<SortKey>,
    has_actions: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct HeadCell {
    key: String,
    title: String,
    sortable: bool,
    class: Option<String>,
}

impl HeadRow {
    /// Build the row from the visible columns.
    #[must_use]
    pub fn new(columns: &[Column]) -> Self {
        let cells = columns
            .iter()
            .map(|column| HeadCell {
                key: column.key().to_string(),
                title: column.title().to_string(),
                sortable: column.is_sortable(),
                class: column.style_class().map(ToString::to_string),
            })
            .collect();
        Self {
            cells,
            sort: None,
            has_actions: false,
        }
    }

    /// Set the active sort directive.
    #[must_use]
    pub fn sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Append an actions column header.
    #[must_use]
    pub const fn actions(mut self, has_actions: bool) -> Self {
        self.has_actions = has_actions;
        self
    }

    /// Render the header row.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from("<tr>");
        for cell in &self.cells {
            html.push_str(&self.cell_html(cell));
        }
        if self.has_actions {
            html.push_str(r#"<th class="datagrid-th datagrid-th-actions" scope="col">Actions</th>"#);
        }
        html.push_str("</tr>");
        html
    }

    /// Component styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        concat!(
            ".datagrid-th { padding: 10px 16px; text-align: left; font-size: 12px; text-transform: uppercase; letter-spacing: 0.04em; color: #6b7280; }\n",
            ".datagrid-th-sortable { cursor: pointer; user-select: none; }\n",
            ".datagrid-th-actions { text-align: right; }\n",
            ".datagrid-sort-arrow { color: #9ca3af; margin-left: 4px; }\n",
        )
        .to_string()
    }

    fn cell_html(&self, cell: &HeadCell) -> String {
        let mut classes = String::from("datagrid-th");
        if let Some(class) = &cell.class {
            classes.push(' ');
            classes.push_str(class);
        }
        if cell.sortable {
            classes.push_str(" datagrid-th-sortable");
        }

        let active = self
            .sort
            .as_ref()
            .filter(|sort| sort.key == cell.key)
            .map(|sort| sort.direction);
        let aria_sort = match active {
            Some(SortDirection::Ascending) => r#" aria-sort="ascending""#,
            Some(SortDirection::Descending) => r#" aria-sort="descending""#,
            None => "",
        };
        let arrow = match active {
            Some(SortDirection::Ascending) => {
                r#"<span class="datagrid-sort-arrow">&#8593;</span>"#
            }
            Some(SortDirection::Descending) => {
                r#"<span class="datagrid-sort-arrow">&#8595;</span>"#
            }
            None => "",
        };
        let sort_attr = if cell.sortable {
            format!(r#" data-action="sort" data-column="{}""#, escape(&cell.key))
        } else {
            String::new()
        };
        format!(
            r#"<th class="{}" scope="col"{}{}>{}{}</th>"#,
            escape(&classes),
            sort_attr,
            aria_sort,
            escape(&cell.title),
            arrow,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns() -> Vec<Column> {
        vec![
            Column::new("id", "ID").sortable(),
            Column::new("name", "Name").sortable().class("wide"),
            Column::new("city", "City"),
        ]
    }

    #[test]
    fn test_head_row_renders_titles() {
        let html = HeadRow::new(&columns()).to_html();
        assert!(html.contains(">ID<"));
        assert!(html.contains("Name"));
        assert!(html.contains("City"));
        assert!(!html.contains("Actions"));
    }

    #[test]
    fn test_sortable_columns_get_affordance() {
        let html = HeadRow::new(&columns()).to_html();
        assert_eq!(html.matches("datagrid-th-sortable").count(), 2);
        assert!(html.contains(r#"data-column="id""#));
        assert!(!html.contains(r#"data-column="city""#));
    }

    #[test]
    fn test_style_class_carried_through() {
        let html = HeadRow::new(&columns()).to_html();
        assert!(html.contains("datagrid-th wide"));
    }

    #[test]
    fn test_active_sort_announced() {
        let html = HeadRow::new(&columns())
            .sort(Some(SortKey::ascending("id")))
            .to_html();
        assert!(html.contains(r#"aria-sort="ascending""#));
        assert!(html.contains("&#8593;"));

        let html = HeadRow::new(&columns())
            .sort(Some(SortKey {
                key: "id".to_string(),
                direction: SortDirection::Descending,
            }))
            .to_html();
        assert!(html.contains(r#"aria-sort="descending""#));
        assert!(html.contains("&#8595;"));
    }

    #[test]
    fn test_inactive_columns_have_no_aria_sort() {
        let html = HeadRow::new(&columns()).to_html();
        assert!(!html.contains("aria-sort"));
    }

    #[test]
    fn test_actions_header() {
        let html = HeadRow::new(&columns()).actions(true).to_html();
        assert!(html.contains(">Actions<"));
        assert!(html.contains("datagrid-th-actions"));
    }
}
