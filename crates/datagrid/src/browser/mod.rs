//! Browser integration for the grid.
//!
//! The only process-wide state the grid touches is its preference store;
//! this module provides the browser-backed implementation.

pub mod storage;

pub use storage::{BrowserStore, StorageScope};
