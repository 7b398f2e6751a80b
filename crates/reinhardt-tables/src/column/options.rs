use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options shared by every column type
///
/// Deserializable so table definitions can live in settings files:
///
/// ```rust
/// use reinhardt_tables::ColumnOptions;
/// use serde_json::json;
///
/// let options: ColumnOptions =
///     serde_json::from_value(json!({"verbose_name": "Actions", "orderable": false})).unwrap();
/// assert_eq!(options.verbose_name.as_deref(), Some("Actions"));
/// assert_eq!(options.orderable, Some(false));
/// assert!(options.visible);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnOptions {
	/// Header text; the column name is used when unset
	pub verbose_name: Option<String>,
	/// Fallback value for empty cells
	pub default: Value,
	/// Orderability override; each column type has its own default
	pub orderable: Option<bool>,
	/// Whether the column is shown
	pub visible: bool,
	/// CSS classes for the column's cells
	pub css_classes: String,
}

impl Default for ColumnOptions {
	fn default() -> Self {
		Self {
			verbose_name: None,
			default: Value::Null,
			orderable: None,
			visible: true,
			css_classes: String::new(),
		}
	}
}
