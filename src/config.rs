//! Declarative actions column configuration

use reinhardt_tables::ColumnOptions;
use serde::{Deserialize, Serialize};

/// Settings-file form of an actions column
///
/// Every field is optional; generic column options sit at the same level.
///
/// ```rust
/// use reinhardt_actionscolumn::{ActionsColumn, ActionsColumnConfig};
/// use serde_json::{Value, json};
///
/// let config: ActionsColumnConfig = serde_json::from_value(json!({
///     "update_view_url": "widget-update",
///     "use_slug": true,
///     "verbose_name": "Actions",
/// }))
/// .unwrap();
///
/// let column = ActionsColumn::<Value>::from_config("actions", config);
/// assert!(column.use_slug());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsColumnConfig {
	/// Inline template source
	pub template_code: Option<String>,
	/// Template name, looked up through the engine
	pub template_name: Option<String>,
	/// Route name of the update view
	pub update_view_url: Option<String>,
	/// Route name of the detail view
	pub detail_view_url: Option<String>,
	/// Route name of the delete view
	pub delete_view_url: Option<String>,
	/// Identify rows by slug instead of primary key
	pub use_slug: bool,
	/// Generic column options
	#[serde(flatten)]
	pub column: ColumnOptions,
}
