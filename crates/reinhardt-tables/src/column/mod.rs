//! Column abstraction and the generic column implementation

mod base;
mod bound;
mod options;

pub use base::BaseColumn;
pub use bound::BoundColumn;
pub use options::ColumnOptions;

use crate::error::TableResult;
use crate::table::RenderPass;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::fmt::Debug;

static DEFAULT_EMPTY_VALUES: Lazy<[Value; 2]> =
	Lazy::new(|| [Value::Null, Value::String(String::new())]);

/// Trait for table column definitions
///
/// A column is configured once per table definition and then asked, row by
/// row, to turn a record into cell markup. Each column is responsible for:
/// - Providing a name and header text
/// - Resolving the raw cell value from a row
/// - Rendering the cell, given the value and its bound metadata
/// - Declaring which raw values count as "no value"
pub trait Column: Debug {
	/// The type of rows this column operates on
	type Row;

	/// Returns the name of this column
	///
	/// This is used as the identifier for ordering and lookups
	fn name(&self) -> &str;

	/// Returns the header text for this column
	fn header(&self) -> &str;

	/// Resolves the raw value of this column for `row`
	fn value(&self, row: &Self::Row) -> Value;

	/// Renders one cell
	///
	/// `table` is the enclosing render pass and may carry a shared render
	/// context. `value` is the output of [`Column::value`] and `column` the
	/// bound metadata for this column in the current table.
	fn render(
		&self,
		row: &Self::Row,
		table: &mut RenderPass<'_>,
		value: &Value,
		column: &BoundColumn,
	) -> TableResult<String>;

	/// Returns whether this column can be ordered
	///
	/// Default: true
	fn orderable(&self) -> bool {
		true
	}

	/// Returns whether this column is shown
	///
	/// Default: true
	fn visible(&self) -> bool {
		true
	}

	/// Returns CSS classes to apply to cells in this column
	///
	/// Default: empty string
	fn css_classes(&self) -> &str {
		""
	}

	/// Fallback emitted instead of rendering when the value is empty
	///
	/// Default: `null`, which renders as an empty cell
	fn default_value(&self) -> Value {
		Value::Null
	}

	/// Raw values treated as "no value"
	///
	/// Default: `null` and the empty string
	fn empty_values(&self) -> &[Value] {
		DEFAULT_EMPTY_VALUES.as_slice()
	}

	/// Returns `true` if `value` is one of [`Column::empty_values`]
	fn is_empty_value(&self, value: &Value) -> bool {
		self.empty_values().contains(value)
	}
}

/// Converts a cell value to display text
///
/// Strings are emitted as-is, `null` as the empty string, anything else in
/// its JSON form.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::value_to_text;
/// use serde_json::json;
///
/// assert_eq!(value_to_text(&json!("abc")), "abc");
/// assert_eq!(value_to_text(&json!(42)), "42");
/// assert_eq!(value_to_text(&json!(null)), "");
/// ```
pub fn value_to_text(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}
