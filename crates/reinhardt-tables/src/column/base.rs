//! Base column implementation

use super::{BoundColumn, Column, ColumnOptions, value_to_text};
use crate::error::TableResult;
use crate::table::RenderPass;
use serde_json::Value;
use std::fmt::Debug;

/// A basic column implementation using a function to extract values
///
/// The cell is the extracted value as text.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::column::BaseColumn;
/// use serde_json::json;
///
/// struct User {
///     id: i32,
///     name: String,
/// }
///
/// let name_column = BaseColumn::new(
///     "name",
///     "User Name",
///     |user: &User| json!(user.name),
/// );
/// ```
pub struct BaseColumn<R, F>
where
	F: Fn(&R) -> Value,
{
	name: String,
	extractor: F,
	options: ColumnOptions,
	_phantom: std::marker::PhantomData<fn(&R)>,
}

impl<R, F> BaseColumn<R, F>
where
	F: Fn(&R) -> Value,
{
	/// Creates a new base column
	pub fn new(name: impl Into<String>, header: impl Into<String>, extractor: F) -> Self {
		Self {
			name: name.into(),
			options: ColumnOptions {
				verbose_name: Some(header.into()),
				..ColumnOptions::default()
			},
			extractor,
			_phantom: std::marker::PhantomData,
		}
	}

	/// Replaces the header text
	pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.options.verbose_name = Some(verbose_name.into());
		self
	}

	/// Sets whether this column is orderable
	pub fn orderable(mut self, orderable: bool) -> Self {
		self.options.orderable = Some(orderable);
		self
	}

	/// Sets whether this column is shown
	pub fn visible(mut self, visible: bool) -> Self {
		self.options.visible = visible;
		self
	}

	/// Sets the fallback for empty cells
	pub fn default(mut self, default: impl Into<Value>) -> Self {
		self.options.default = default.into();
		self
	}

	/// Sets CSS classes for this column
	pub fn css_classes(mut self, css_classes: impl Into<String>) -> Self {
		self.options.css_classes = css_classes.into();
		self
	}
}

impl<R, F> Debug for BaseColumn<R, F>
where
	F: Fn(&R) -> Value,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BaseColumn")
			.field("name", &self.name)
			.field("options", &self.options)
			.finish_non_exhaustive()
	}
}

impl<R, F> Column for BaseColumn<R, F>
where
	F: Fn(&R) -> Value,
{
	type Row = R;

	fn name(&self) -> &str {
		&self.name
	}

	fn header(&self) -> &str {
		self.options.verbose_name.as_deref().unwrap_or(&self.name)
	}

	fn value(&self, row: &R) -> Value {
		(self.extractor)(row)
	}

	fn render(
		&self,
		_row: &R,
		_table: &mut RenderPass<'_>,
		value: &Value,
		_column: &BoundColumn,
	) -> TableResult<String> {
		Ok(value_to_text(value))
	}

	fn orderable(&self) -> bool {
		self.options.orderable.unwrap_or(true)
	}

	fn visible(&self) -> bool {
		self.options.visible
	}

	fn css_classes(&self) -> &str {
		&self.options.css_classes
	}

	fn default_value(&self) -> Value {
		self.options.default.clone()
	}
}
