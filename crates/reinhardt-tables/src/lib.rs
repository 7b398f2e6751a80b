//! Data table rendering utilities for Reinhardt
//!
//! This crate provides the column side of Django-tables2 style tables:
//! a [`Column`] trait that turns a row into cell markup, the per-table
//! [`BoundColumn`] metadata handed to it, and a [`SimpleTable`] that drives
//! the cell pipeline over a list of rows.
//!
//! # Cell pipeline
//!
//! For every visible column and every row:
//!
//! 1. [`Column::value`] resolves the raw cell value from the row.
//! 2. If that value is one of the column's [`Column::empty_values`], the
//!    bound column's default is emitted and the column is not asked to render.
//! 3. Otherwise [`Column::render`] receives the row, the [`RenderPass`]
//!    (which may carry a shared [`RenderContext`]), the value and the
//!    [`BoundColumn`].
//!
//! Errors abort the whole render.
//!
//! # Example
//!
//! ```rust
//! use reinhardt_tables::{BaseColumn, SimpleTable};
//! use serde_json::json;
//!
//! struct User {
//!     id: i32,
//!     name: String,
//! }
//!
//! let mut table = SimpleTable::with_rows(vec![User { id: 1, name: "Alice".into() }]);
//! table.add_column(Box::new(BaseColumn::new("name", "Name", |u: &User| json!(u.name))));
//!
//! let rows = table.render_rows(None).unwrap();
//! assert_eq!(rows, vec![vec!["Alice".to_string()]]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod record;
pub mod table;

// Re-exports for convenience
pub use column::{BaseColumn, BoundColumn, Column, ColumnOptions, value_to_text};
pub use error::{TableError, TableResult};
pub use record::{Record, accessor_value};
pub use reinhardt_templates::RenderContext;
pub use table::{RenderPass, SimpleTable};
