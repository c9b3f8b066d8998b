//! Header toolbar: search box, table actions, column-selector trigger.

use crate::html::escape;
use serde::{Deserialize, Serialize};

/// The toolbar above the table: a search box, optional refresh /
/// download / add buttons, and the column-selector trigger.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Toolbar {
    search_term: String,
    placeholder: Option<String>,
    show_refresh: bool,
    show_download: bool,
    show_add: bool,
    selector_open: bool,
    test_id_value: Option<String>,
}

impl Toolbar {
    /// Create an empty toolbar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the current search term.
    #[must_use]
    pub fn search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    /// Override the search placeholder.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Show the refresh button.
    #[must_use]
    pub const fn refresh(mut self, show: bool) -> Self {
        self.show_refresh = show;
        self
    }

    /// Show the download button.
    #[must_use]
    pub const fn download(mut self, show: bool) -> Self {
        self.show_download = show;
        self
    }

    /// Show the add button.
    #[must_use]
    pub const fn add(mut self, show: bool) -> Self {
        self.show_add = show;
        self
    }

    /// Mark the column selector as open (reflected in `aria-expanded`).
    #[must_use]
    pub const fn selector_open(mut self, open: bool) -> Self {
        self.selector_open = open;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Render the toolbar.
    #[must_use]
    pub fn to_html(&self) -> String {
        let test_id = escape(self.test_id_value.as_deref().unwrap_or("datagrid-toolbar"));
        let placeholder = self.placeholder.as_deref().unwrap_or("Search...");
        let mut html = format!(
            r#"<div class="datagrid-toolbar" data-testid="{test_id}">"#
        );
        html.push_str(&format!(
            r#"<input class="datagrid-search" type="search" value="{}" placeholder="{}" aria-label="Search records" data-action="search"/>"#,
            escape(&self.search_term),
            escape(placeholder),
        ));
        html.push_str(r#"<div class="datagrid-toolbar-buttons">"#);
        if self.show_refresh {
            html.push_str(button("refresh", "Refresh", "\u{21bb}").as_str());
        }
        if self.show_download {
            html.push_str(button("download", "Download", "\u{2913}").as_str());
        }
        if self.show_add {
            html.push_str(button("add", "Add", "+").as_str());
        }
        html.push_str(&format!(
            r#"<button class="datagrid-button datagrid-columns-trigger" type="button" data-action="columns" title="Columns" aria-haspopup="true" aria-expanded="{}">&#9881;</button>"#,
            self.selector_open,
        ));
        html.push_str("</div></div>");
        html
    }

    /// Component styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        concat!(
            ".datagrid-toolbar { display: flex; align-items: center; justify-content: space-between; gap: 8px; padding: 12px 16px; }\n",
            ".datagrid-search { flex: 1; max-width: 320px; padding: 6px 10px; border: 1px solid #d1d5db; border-radius: 6px; }\n",
            ".datagrid-toolbar-buttons { display: flex; gap: 8px; }\n",
            ".datagrid-button { padding: 6px 10px; border: 1px solid #d1d5db; border-radius: 6px; background: transparent; cursor: pointer; }\n",
        )
        .to_string()
    }
}

fn button(action: &str, title: &str, glyph: &str) -> String {
    format!(
        r#"<button class="datagrid-button datagrid-{action}" type="button" data-action="{action}" title="{title}">{glyph}</button>"#
    )
}
