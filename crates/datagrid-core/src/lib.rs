//! Data pipeline and state core for the Datagrid component.
//!
//! Given a tabular dataset and a column schema, [`TableState`] computes a
//! searchable, sortable, paginated view through the fixed pipeline
//! filter → sort → paginate:
//! - Records and values: [`Record`], [`Value`]
//! - Schema: [`Column`], [`Schema`]
//! - Pipeline stages: [`filter::filter`], [`sort::sort`], [`PageWindow`]
//! - Visibility: [`VisibleColumns`], persisted through a [`PreferenceStore`]
//! - Orchestration: [`TableState`] and its computed [`TableView`]
//!
//! Each pagination concern is either owned by the orchestrator or
//! delegated to an external authority (server-driven pagination), chosen
//! at construction.

pub mod column;
pub mod filter;
pub mod page;
pub mod prefs;
pub mod record;
pub mod sort;
pub mod table;
pub mod value;
pub mod visibility;

pub use column::{CellRenderer, Column, Schema, SchemaError};
pub use page::PageWindow;
pub use prefs::{
    load_visibility, save_visibility, visibility_key, MemoryStore, NullStore, PreferenceStore,
    StoreError,
};
pub use record::{records_from_json, Record};
pub use sort::{SortDirection, SortKey};
pub use table::{
    field_value, ActionHook, ActionsRenderer, PageHook, RecordHook, TableState, TableView,
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS,
};
pub use value::Value;
pub use visibility::VisibleColumns;
