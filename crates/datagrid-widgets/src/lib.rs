//! Presentation collaborators for the Datagrid component.
//!
//! Every collaborator is a pure renderer: built from computed state
//! ([`datagrid_core::TableView`] and friends), it emits HTML through
//! `to_html()` and component styles through `to_css()`. Interactive
//! elements carry `data-action` attributes the host wires back to the
//! orchestrator's operations.

pub mod body;
pub mod column_selector;
pub mod footer;
pub mod head;
pub mod html;
pub mod toolbar;

pub use body::Body;
pub use column_selector::ColumnSelector;
pub use footer::Footer;
pub use head::HeadRow;
pub use html::escape;
pub use toolbar::Toolbar;
