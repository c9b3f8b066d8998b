//! Footer: page-size selector, range label, page navigation.

use crate::html::escape;
use datagrid_core::TableView;
use serde::{Deserialize, Serialize};

/// The pager under the table. Purely presentational over values computed
/// by the orchestrator; navigation disables itself at the bounds and on
/// an empty table instead of erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Footer {
    current_page: usize,
    total_pages: usize,
    page_size: usize,
    page_size_options: Vec<usize>,
    total_records: usize,
    start: usize,
    end: usize,
}

impl Footer {
    /// Build the footer from a computed view.
    #[must_use]
    pub fn from_view(view: &TableView) -> Self {
        Self {
            current_page: view.current_page,
            total_pages: view.total_pages,
            page_size: view.page_size,
            page_size_options: view.page_size_options.clone(),
            total_records: view.total_records,
            start: view.start,
            end: view.end,
        }
    }

    /// Render the footer.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::from(r#"<div class="datagrid-footer">"#);
        html.push_str(&self.size_select_html());
        html.push_str(&format!(
            r#"<span class="datagrid-range">{}</span>"#,
            escape(&self.range_label()),
        ));
        html.push_str(&self.nav_html());
        html.push_str("</div>");
        html
    }

    /// Component styles.
    #[must_use]
    pub fn to_css(&self) -> String {
        concat!(
            ".datagrid-footer { display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 12px 16px; }\n",
            ".datagrid-page-size { padding: 4px 8px; border: 1px solid #d1d5db; border-radius: 6px; }\n",
            ".datagrid-range { font-size: 13px; color: #6b7280; }\n",
            ".datagrid-nav button { padding: 4px 10px; border: 1px solid #d1d5db; border-radius: 6px; background: transparent; cursor: pointer; }\n",
            ".datagrid-nav button[disabled] { opacity: 0.4; cursor: default; }\n",
        )
        .to_string()
    }

    fn range_label(&self) -> String {
        if self.total_records == 0 {
            return "No records".to_string();
        }
        format!(
            "Showing {} to {} of {} records",
            self.start + 1,
            self.end,
            self.total_records,
        )
    }

    fn size_select_html(&self) -> String {
        let mut html = String::from(
            r#"<select class="datagrid-page-size" data-action="page-size" aria-label="Records per page">"#,
        );
        for option in &self.page_size_options {
            let selected = if *option == self.page_size {
                " selected"
            } else {
                ""
            };
            html.push_str(&format!(r#"<option value="{option}"{selected}>{option}</option>"#));
        }
        html.push_str("</select>");
        html
    }

    fn nav_html(&self) -> String {
        let prev_disabled = self.current_page <= 1 || self.total_pages == 0;
        let next_disabled = self.current_page >= self.total_pages;
        format!(
            concat!(
                r#"<nav class="datagrid-nav" aria-label="Pagination">"#,
                r#"<button type="button" data-action="page" data-page="{prev}"{prev_dis}>Previous</button>"#,
                r#"<span class="datagrid-page-label">Page {page} of {pages}</span>"#,
                r#"<button type="button" data-action="page" data-page="{next}"{next_dis}>Next</button>"#,
                "</nav>",
            ),
            prev = self.current_page.saturating_sub(1).max(1),
            prev_dis = disabled(prev_disabled),
            page = self.current_page,
            pages = self.total_pages,
            next = (self.current_page + 1).min(self.total_pages.max(1)),
            next_dis = disabled(next_disabled),
        )
    }
}

const fn disabled(is_disabled: bool) -> &'static str {
    if is_disabled {
        " disabled"
    } else {
        ""
    }
}
