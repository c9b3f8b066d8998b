//! The assembled grid component.
//!
//! `Grid` wires the orchestrator to the presentation collaborators:
//! toolbar, column selector, header row, body, and footer, composed in
//! that order around a scrollable table. Rendering is a pure function of
//! the orchestrator's computed view plus one piece of UI-local state,
//! whether the column selector is open.

use datagrid_core::{TableState, TableView};
use datagrid_widgets::{escape, Body, ColumnSelector, Footer, HeadRow, Toolbar};

/// A complete data grid: state plus presentation.
pub struct Grid {
    state: TableState,
    selector_open: bool,
}

impl Grid {
    /// Wrap an orchestrator.
    #[must_use]
    pub const fn new(state: TableState) -> Self {
        Self {
            state,
            selector_open: false,
        }
    }

    /// The underlying orchestrator.
    #[must_use]
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    /// Mutable access to the orchestrator, for wiring host events.
    pub fn state_mut(&mut self) -> &mut TableState {
        &mut self.state
    }

    /// Whether the column selector popover is open.
    #[must_use]
    pub const fn is_selector_open(&self) -> bool {
        self.selector_open
    }

    /// Toggle the column selector popover.
    pub fn toggle_selector(&mut self) {
        self.selector_open = !self.selector_open;
    }

    /// Close the column selector popover.
    pub fn close_selector(&mut self) {
        self.selector_open = false;
    }

    /// The current computed view.
    #[must_use]
    pub fn view(&self) -> TableView {
        self.state.view()
    }

    /// Render the whole component.
    #[must_use]
    pub fn render(&self) -> String {
        let view = self.state.view();

        let toolbar = Toolbar::new()
            .search_term(&view.search)
            .refresh(self.state.has_refresh_hook())
            .download(self.state.has_download_hook())
            .add(self.state.has_add_hook())
            .selector_open(self.selector_open)
            .test_id(format!("{}-toolbar", view.table_id));
        let selector = ColumnSelector::new(self.state.schema(), self.state.visible_columns())
            .open(self.selector_open);
        let head = HeadRow::new(&view.columns)
            .sort(view.sort.clone())
            .actions(view.has_actions);
        let footer = Footer::from_view(&view);
        let body = Body::new(view.columns, view.rows)
            .loading(view.loading)
            .view_button(self.state.has_view_hook())
            .edit_button(self.state.has_edit_hook())
            .delete_button(self.state.has_delete_hook())
            .custom_actions(self.state.custom_actions());

        format!(
            concat!(
                r#"<div class="datagrid" data-table-id="{id}">"#,
                "{toolbar}{selector}",
                r#"<div class="datagrid-scroll"><table class="datagrid-table">"#,
                "<thead>{head}</thead><tbody>{body}</tbody>",
                "</table></div>{footer}</div>",
            ),
            id = escape(&view.table_id),
            toolbar = toolbar.to_html(),
            selector = selector.to_html(),
            head = head.to_html(),
            body = body.to_html(),
            footer = footer.to_html(),
        )
    }

    /// The aggregated component stylesheet.
    #[must_use]
    pub fn stylesheet(&self) -> String {
        let view = self.state.view();
        let mut css = String::from(concat!(
            ".datagrid { border: 1px solid #e5e7eb; border-radius: 8px; background: #fff; }\n",
            ".datagrid-scroll { overflow-x: auto; }\n",
            ".datagrid-table { width: 100%; border-collapse: collapse; }\n",
            ".datagrid-table tr { border-bottom: 1px solid #e5e7eb; }\n",
        ));
        css.push_str(&Toolbar::new().to_css());
        css.push_str(
            &ColumnSelector::new(self.state.schema(), self.state.visible_columns()).to_css(),
        );
        css.push_str(&HeadRow::new(&view.columns).to_css());
        css.push_str(&Footer::from_view(&view).to_css());
        css.push_str(&Body::new(view.columns, view.rows).to_css());
        css
    }
}
