//! Tables and render passes

use crate::column::{BoundColumn, Column, value_to_text};
use crate::error::{TableError, TableResult};
use reinhardt_templates::RenderContext;
use std::fmt::Debug;

/// One rendering pass over a table
///
/// When the table is rendered as part of a page, the page's
/// [`RenderContext`] is attached so template-backed columns render against
/// it. Columns must leave it as they found it.
#[derive(Debug, Default)]
pub struct RenderPass<'a> {
	context: Option<&'a mut RenderContext>,
}

impl<'a> RenderPass<'a> {
	/// Creates a pass with no attached context
	pub fn new() -> Self {
		Self { context: None }
	}

	/// Creates a pass sharing `context`
	pub fn with_context(context: &'a mut RenderContext) -> Self {
		Self {
			context: Some(context),
		}
	}

	/// Returns `true` if a render context is attached
	pub fn has_context(&self) -> bool {
		self.context.is_some()
	}

	/// Returns the attached render context, if any
	pub fn context_mut(&mut self) -> Option<&mut RenderContext> {
		self.context.as_deref_mut()
	}
}

/// A table over an in-memory list of rows
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::{BaseColumn, SimpleTable};
/// use serde_json::json;
///
/// let mut table = SimpleTable::with_rows(vec![(1, "Alice".to_string()), (2, "Bob".to_string())]);
/// table.add_column(Box::new(BaseColumn::new("id", "ID", |row: &(i32, String)| json!(row.0))));
/// table.add_column(Box::new(BaseColumn::new("name", "Name", |row: &(i32, String)| json!(row.1))));
///
/// assert_eq!(table.headers(), vec!["ID", "Name"]);
/// assert_eq!(table.render_column("name", None).unwrap(), vec!["Alice", "Bob"]);
/// ```
pub struct SimpleTable<R> {
	rows: Vec<R>,
	columns: Vec<Box<dyn Column<Row = R>>>,
}

impl<R> SimpleTable<R> {
	/// Creates an empty table
	pub fn new() -> Self {
		Self {
			rows: Vec::new(),
			columns: Vec::new(),
		}
	}

	/// Creates a table over `rows`
	pub fn with_rows(rows: Vec<R>) -> Self {
		Self {
			rows,
			columns: Vec::new(),
		}
	}

	/// Appends a column
	pub fn add_column(&mut self, column: Box<dyn Column<Row = R>>) {
		self.columns.push(column);
	}

	/// Returns all columns, hidden ones included
	pub fn columns(&self) -> &[Box<dyn Column<Row = R>>] {
		&self.columns
	}

	/// Returns the rows
	pub fn rows(&self) -> &[R] {
		&self.rows
	}

	/// Looks a column up by name
	pub fn column(&self, name: &str) -> Option<&dyn Column<Row = R>> {
		self.columns
			.iter()
			.find(|column| column.name() == name)
			.map(|column| &**column)
	}

	/// Returns the columns that are shown
	pub fn visible_columns(&self) -> impl Iterator<Item = &dyn Column<Row = R>> + '_ {
		self.columns
			.iter()
			.filter(|column| column.visible())
			.map(|column| &**column)
	}

	/// Returns the header text of the visible columns
	pub fn headers(&self) -> Vec<&str> {
		self.visible_columns().map(|column| column.header()).collect()
	}

	/// Renders the cells of one row for the visible columns
	pub fn render_row(&self, row: &R, pass: &mut RenderPass<'_>) -> TableResult<Vec<String>> {
		self.visible_columns()
			.map(|column| render_cell(column, row, pass))
			.collect()
	}

	/// Renders every row
	///
	/// `context` is the page's render context, when the table is rendered
	/// inside a page. The first failing cell aborts the render.
	pub fn render_rows(
		&self,
		context: Option<&mut RenderContext>,
	) -> TableResult<Vec<Vec<String>>> {
		let mut pass = match context {
			Some(context) => RenderPass::with_context(context),
			None => RenderPass::new(),
		};
		tracing::debug!(
			rows = self.rows.len(),
			columns = self.columns.len(),
			shared_context = pass.has_context(),
			"rendering table"
		);
		self.rows
			.iter()
			.map(|row| self.render_row(row, &mut pass))
			.collect()
	}

	/// Renders one column for every row
	///
	/// # Errors
	///
	/// [`TableError::ColumnNotFound`] if no column is called `name`.
	pub fn render_column(
		&self,
		name: &str,
		context: Option<&mut RenderContext>,
	) -> TableResult<Vec<String>> {
		let column = self
			.column(name)
			.ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
		let mut pass = match context {
			Some(context) => RenderPass::with_context(context),
			None => RenderPass::new(),
		};
		self.rows
			.iter()
			.map(|row| render_cell(column, row, &mut pass))
			.collect()
	}
}

fn render_cell<R>(
	column: &dyn Column<Row = R>,
	row: &R,
	pass: &mut RenderPass<'_>,
) -> TableResult<String> {
	let bound = BoundColumn::bind(column);
	let value = column.value(row);
	if column.is_empty_value(&value) {
		return Ok(value_to_text(&bound.default));
	}
	column.render(row, pass, &value, &bound)
}

impl<R> Default for SimpleTable<R> {
	fn default() -> Self {
		Self::new()
	}
}

impl<R> Debug for SimpleTable<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SimpleTable")
			.field("rows", &self.rows.len())
			.field("columns", &self.columns)
			.finish()
	}
}
