//! Datagrid: a reusable data-grid component.
//!
//! Given a tabular dataset and a column schema, the grid computes a
//! searchable, sortable, paginated table with optional per-row actions
//! and user-controlled column visibility. The pipeline is always
//! filter → sort → paginate; pagination is either owned by the grid or
//! delegated to an external (server-driven) authority.
//!
//! # Example
//!
//! ```
//! use datagrid::{Column, Grid, Record, Schema, TableState};
//!
//! let schema = Schema::new(vec![
//!     Column::new("id", "ID").sortable(),
//!     Column::new("name", "Name").sortable(),
//! ])
//! .expect("unique column keys");
//!
//! let records = vec![
//!     Record::new().field("id", 1).field("name", "Ada"),
//!     Record::new().field("id", 2).field("name", "Grace"),
//! ];
//!
//! let mut grid = Grid::new(
//!     TableState::new(schema, "people-table").records(records),
//! );
//! grid.state_mut().toggle_sort("name");
//! let html = grid.render();
//! assert!(html.contains("Ada"));
//! ```

pub mod browser;
pub mod grid;

pub use browser::{BrowserStore, StorageScope};
pub use datagrid_core::{
    field_value, load_visibility, records_from_json, save_visibility, visibility_key,
    CellRenderer, Column, MemoryStore, NullStore, PageWindow, PreferenceStore, Record, Schema,
    SchemaError, SortDirection, SortKey, StoreError, TableState, TableView, Value,
    VisibleColumns, DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS,
};
pub use datagrid_widgets as widgets;
pub use grid::Grid;
