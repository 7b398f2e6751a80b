//! # Reinhardt Actions Column
//!
//! A [`reinhardt_tables`] column that renders per-row action links (update,
//! detail, delete) from a template.
//!
//! Every cell is rendered against the page's render context, extended for
//! the duration of the call with:
//!
//! - `record` -- data record for the current row
//! - `value` -- value from `record` that corresponds to the current column
//! - `default` -- appropriate default value to use as fallback
//! - `arg` -- the row's slug or primary key
//! - `update_view_url_resolved`, `detail_view_url_resolved`,
//!   `delete_view_url_resolved` -- the configured route names
//!
//! The template is either inline source ([`ActionsColumnBuilder::template_code`])
//! or a template name ([`ActionsColumnBuilder::template_name`]). With neither,
//! the built-in [`DEFAULT_TEMPLATE_NAME`] is used.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_actionscolumn::ActionsColumn;
//! use reinhardt_tables::{Record, SimpleTable};
//! use serde::Serialize;
//! use serde_json::{Value, json};
//!
//! #[derive(Serialize)]
//! struct Widget {
//!     id: i64,
//!     name: String,
//! }
//!
//! impl Record for Widget {
//!     fn pk(&self) -> Option<Value> {
//!         Some(json!(self.id))
//!     }
//! }
//!
//! let mut table = SimpleTable::with_rows(vec![Widget { id: 42, name: "Gear".into() }]);
//! table.add_column(Box::new(
//!     ActionsColumn::<Widget>::builder("actions")
//!         .template_code("{{ update_view_url_resolved }}/{{ arg }}")
//!         .update_view_url("widget-update")
//!         .build(),
//! ));
//!
//! let rows = table.render_rows(None).unwrap();
//! assert_eq!(rows[0][0], "widget-update/42");
//! ```
//!
//! ## Route resolution
//!
//! Route names are passed to the template as configured. Installing a
//! [`UrlResolver`] with [`ActionsColumnBuilder::url_resolver`] replaces them
//! with reversed URLs instead.

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod config;
pub mod resolver;
pub mod templates;

pub use column::{ActionsColumn, ActionsColumnBuilder};
pub use config::ActionsColumnConfig;
pub use resolver::{RoutePatterns, UrlResolver};
pub use templates::{DEFAULT_TEMPLATE_NAME, default_engine, register_builtin_templates};
