//! Column descriptors and the table schema.

use crate::record::Record;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A custom cell renderer: produces display markup from the raw value and
/// its whole record.
pub type CellRenderer = Arc<dyn Fn(&Value, &Record) -> String + Send + Sync>;

/// Column definition: the static schema entry for one field.
#[derive(Clone)]
pub struct Column {
    /// Canonical field key. Trimmed at construction so incidental
    /// whitespace never reaches a lookup.
    key: String,
    /// Display header
    title: String,
    /// Whether the column offers sorting
    sortable: bool,
    /// Optional style class for header and cells
    class: Option<String>,
    /// Optional custom cell renderer
    render: Option<CellRenderer>,
}

impl Column {
    /// Create a new column. The key is trimmed.
    #[must_use]
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into().trim().to_string(),
            title: title.into(),
            sortable: false,
            class: None,
            render: None,
        }
    }

    /// Make the column sortable.
    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set a style class applied to the header and cells.
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Set a custom cell renderer.
    #[must_use]
    pub fn render<F>(mut self, render: F) -> Self
    where
        F: Fn(&Value, &Record) -> String + Send + Sync + 'static,
    {
        self.render = Some(Arc::new(render));
        self
    }

    /// The canonical (trimmed) field key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The display header.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Whether the column offers sorting.
    #[must_use]
    pub const fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// The style class, if any.
    #[must_use]
    pub fn style_class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    /// Whether a custom renderer is set.
    #[must_use]
    pub const fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Render the cell for a record: the custom renderer when present,
    /// else the value's display form.
    #[must_use]
    pub fn render_cell(&self, record: &Record) -> String {
        let value = record.value_or_null(self.key());
        match &self.render {
            Some(render) => render(value, record),
            None => value.display(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("class", &self.class)
            .field("render", &self.render.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Ordered, validated column list for one table instance.
#[derive(Debug, Clone)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Build a schema from an ordered column list.
    ///
    /// # Errors
    ///
    /// Rejects an empty list and duplicate trimmed keys; both would break
    /// the visibility invariant or make lookups ambiguous.
    pub fn new(columns: Vec<Column>) -> Result<Self, SchemaError> {
        if columns.is_empty() {
            return Err(SchemaError::Empty);
        }
        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.key() == column.key()) {
                return Err(SchemaError::DuplicateKey(column.key().to_string()));
            }
        }
        Ok(Self { columns })
    }

    /// The ordered columns.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by key.
    #[must_use]
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key() == key)
    }

    /// Check whether a key belongs to the schema.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.column(key).is_some()
    }

    /// Iterate the canonical keys in schema order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(Column::key)
    }

    /// Number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// A schema is never empty; kept for symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Error building a schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The column list was empty
    Empty,
    /// Two columns share the same trimmed key
    DuplicateKey(String),
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "schema must contain at least one column"),
            Self::DuplicateKey(key) => write!(f, "duplicate column key: {key}"),
        }
    }
}

impl std::error::Error for SchemaError {}
