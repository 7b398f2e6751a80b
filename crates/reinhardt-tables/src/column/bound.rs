use super::Column;
use serde_json::Value;

/// A column combined with the metadata resolved for one table
#[derive(Debug, Clone, PartialEq)]
pub struct BoundColumn {
	/// Column name
	pub name: String,
	/// Header text
	pub header: String,
	/// Fallback value for empty cells
	pub default: Value,
	/// Whether the column can be ordered
	pub orderable: bool,
	/// Whether the column is shown
	pub visible: bool,
}

impl BoundColumn {
	/// Binds `column`, snapshotting its current metadata
	pub fn bind<C>(column: &C) -> Self
	where
		C: Column + ?Sized,
	{
		Self {
			name: column.name().to_string(),
			header: column.header().to_string(),
			default: column.default_value(),
			orderable: column.orderable(),
			visible: column.visible(),
		}
	}
}
