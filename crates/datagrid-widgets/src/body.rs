//! Table body: one row per page record, plus loading and empty states.

use crate::html::escape;
use datagrid_core::{ActionsRenderer, Column, Record};

/// The `<tbody>` content for one page of records.
///
/// Default cells render the value's display form, escaped. A column's
/// custom renderer and the custom actions renderer return markup that is
/// interpolated verbatim; that contract belongs to the caller.
#[derive(Clone, Default)]
pub struct Body {
    columns: Vec<Column>,
    rows: Vec<Record>,
    loading: bool,
    view_button: bool,
    edit_button: bool,
    delete_button: bool,
    custom_actions: Option<ActionsRenderer>,
}

impl Body {
    /// Build the body from the visible columns and page records.
    #[must_use]
    pub fn new(columns: Vec<Column>, rows: Vec<Record>) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Show the loading state instead of rows.
    #[must_use]
    pub const fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Render a view button per row.
    #[must_use]
    pub const fn view_button(mut self, show: bool) -> Self {
        self.view_button = show;
        self
    }

    /// Render an edit button per row.
    #[must_use]
    pub const fn edit_button(mut self, show: bool) -> Self {
        self.edit_button = show;
        self
    }

    /// Render a delete button per row.
    #[must_use]
    pub const fn delete_button(mut self, show: bool) -> Self {
        self.delete_button = show;
        self
    }

    /// Custom actions-cell renderer.
    #[must_use]
    pub fn custom_actions(mut self, render: Option<ActionsRenderer>) -> Self {
        self.custom_actions = render;
        self
    }

    fn has_actions(&self) -> bool {
        self.view_button || self.edit_button || self.delete_button || self.custom_actions.is_some()
    }

    fn colspan(&self) -> usize {
        self.columns.len() + usize::from(self.has_actions())
    }

    /// Render the body rows.
    #[must_use]
    pub fn to_html(&self) -> String {
        if self.loading {
            return self.message_row("datagrid-loading", "Loading data...");
        }
        if self.rows.is_empty() {
            return self.message_row("datagrid-empty", "No data available");
        }
        let mut html = String::new();
        for (index, record) in self.rows.iter().enumerate() {
            html.push_str(&self.row_html(index, record));
        }
        html
    }

    /// Component styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        concat!(
            ".datagrid-td { padding: 12px 16px; font-size: 14px; }\n",
            ".datagrid-row:hover { background: #f9fafb; }\n",
            ".datagrid-td-actions { text-align: right; }\n",
            ".datagrid-loading td, .datagrid-empty td { padding: 16px; text-align: center; color: #6b7280; }\n",
            ".datagrid-row-button { padding: 4px 10px; border: 1px solid #d1d5db; border-radius: 6px; background: transparent; cursor: pointer; margin-left: 4px; }\n",
        )
        .to_string()
    }

    fn message_row(&self, class: &str, message: &str) -> String {
        format!(
            r#"<tr class="{class}"><td colspan="{}">{}</td></tr>"#,
            self.colspan(),
            escape(message),
        )
    }

    fn row_html(&self, index: usize, record: &Record) -> String {
        let mut html = format!(r#"<tr class="datagrid-row" data-row="{index}">"#);
        for column in &self.columns {
            let mut classes = String::from("datagrid-td");
            if let Some(class) = column.style_class() {
                classes.push(' ');
                classes.push_str(class);
            }
            let content = if column.has_renderer() {
                // custom renderers return markup
                column.render_cell(record)
            } else {
                escape(&column.render_cell(record))
            };
            html.push_str(&format!(
                r#"<td class="{}">{}</td>"#,
                escape(&classes),
                content,
            ));
        }
        if self.has_actions() {
            html.push_str(&format!(
                r#"<td class="datagrid-td datagrid-td-actions">{}</td>"#,
                self.actions_html(index, record),
            ));
        }
        html.push_str("</tr>");
        html
    }

    fn actions_html(&self, index: usize, record: &Record) -> String {
        let mut html = String::new();
        if self.view_button {
            html.push_str(&row_button("view", index, "View details", "\u{1f441}"));
        }
        if self.edit_button {
            html.push_str(&row_button("edit", index, "Edit", "\u{270e}"));
        }
        if self.delete_button {
            html.push_str(&row_button("delete", index, "Delete", "\u{2715}"));
        }
        if let Some(render) = &self.custom_actions {
            html.push_str(&render(record));
        }
        html
    }
}

fn row_button(action: &str, index: usize, title: &str, glyph: &str) -> String {
    format!(
        r#"<button class="datagrid-row-button datagrid-{action}" type="button" data-action="{action}" data-row="{index}" title="{title}">{glyph}</button>"#
    )
}

impl std::fmt::Debug for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("columns", &self.columns.len())
            .field("rows", &self.rows.len())
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn columns() -> Vec<Column> {
        vec![Column::new("id", "ID"), Column::new("name", "Name")]
    }

    fn rows() -> Vec<Record> {
        vec![
            Record::new().field("id", 1).field("name", "Alice"),
            Record::new().field("id", 2).field("name", "Bob"),
        ]
    }

    #[test]
    fn test_body_renders_rows_and_cells() {
        let html = Body::new(columns(), rows()).to_html();
        assert_eq!(html.matches("datagrid-row\"").count(), 2);
        assert!(html.contains(">Alice<"));
        assert!(html.contains(">2<"));
    }

    #[test]
    fn test_loading_state() {
        let html = Body::new(columns(), rows()).loading(true).to_html();
        assert!(html.contains("Loading data..."));
        assert!(html.contains(r#"colspan="2""#));
        assert!(!html.contains("Alice"));
    }

    #[test]
    fn test_empty_state() {
        let html = Body::new(columns(), Vec::new()).to_html();
        assert!(html.contains("No data available"));
    }

    #[test]
    fn test_colspan_includes_actions_column() {
        let html = Body::new(columns(), Vec::new()).view_button(true).to_html();
        assert!(html.contains(r#"colspan="3""#));
    }

    #[test]
    fn test_default_cells_are_escaped() {
        let records = vec![Record::new().field("id", 1).field("name", "<img>")];
        let html = Body::new(columns(), records).to_html();
        assert!(html.contains("&lt;img&gt;"));
        assert!(!html.contains("<img>"));
    }

    #[test]
    fn test_custom_renderer_markup_is_verbatim() {
        let columns = vec![
            Column::new("id", "ID"),
            Column::new("name", "Name").render(|value, _| format!("<b>{}</b>", value.display())),
        ];
        let html = Body::new(columns, rows()).to_html();
        assert!(html.contains("<b>Alice</b>"));
    }

    #[test]
    fn test_row_action_buttons() {
        let html = Body::new(columns(), rows())
            .view_button(true)
            .delete_button(true)
            .to_html();
        assert!(html.contains(r#"data-action="view" data-row="0""#));
        assert!(html.contains(r#"data-action="delete" data-row="1""#));
        assert!(!html.contains(r#"data-action="edit""#));
    }

    #[test]
    fn test_custom_actions_renderer() {
        let render: ActionsRenderer = Arc::new(|record: &Record| {
            format!("<a href=\"/item/{}\">open</a>", record.value_or_null("id").display())
        });
        let html = Body::new(columns(), rows())
            .custom_actions(Some(render))
            .to_html();
        assert!(html.contains(r#"<a href="/item/1">open</a>"#));
        assert!(html.contains("datagrid-td-actions"));
    }

    #[test]
    fn test_column_class_on_cells() {
        let columns = vec![Column::new("id", "ID").class("numeric")];
        let html = Body::new(columns, vec![Record::new().field("id", 5)]).to_html();
        assert!(html.contains("datagrid-td numeric"));
    }
}
