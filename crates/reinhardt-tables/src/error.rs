//! Table error types.

use reinhardt_templates::TemplateError;
use thiserror::Error;

/// Result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

/// Errors raised while rendering table cells.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TableError {
	/// Record does not expose the attribute a column needs.
	#[error("column '{column}': record has no '{attribute}' attribute")]
	MissingAttribute {
		/// Column that asked for the attribute.
		column: String,
		/// Attribute name (`pk`, `slug`).
		attribute: &'static str,
	},

	/// No column with this name in the table.
	#[error("column not found: {0}")]
	ColumnNotFound(String),

	/// Template lookup or rendering failed.
	#[error(transparent)]
	Template(#[from] TemplateError),

	/// Record could not be converted into a template value.
	#[error("failed to serialize record: {0}")]
	Serialization(#[from] serde_json::Error),
}
