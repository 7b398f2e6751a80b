//! The actions column

use crate::config::ActionsColumnConfig;
use crate::resolver::UrlResolver;
use crate::templates::{DEFAULT_TEMPLATE_NAME, default_engine};
use reinhardt_tables::{
	BoundColumn, Column, ColumnOptions, Record, RenderContext, RenderPass, TableError,
	TableResult, accessor_value,
};
use reinhardt_templates::{Frame, TemplateEngine};
use serde_json::Value;
use std::fmt::Debug;
use std::marker::PhantomData;
use std::sync::Arc;

/// Column rendering update/detail/delete links for each row
///
/// Built with [`ActionsColumn::builder`] or [`ActionsColumn::from_config`].
/// See the [crate documentation](crate) for the template variables.
pub struct ActionsColumn<R> {
	name: String,
	options: ColumnOptions,
	template_code: Option<String>,
	template_name: Option<String>,
	update_view_url: Option<String>,
	detail_view_url: Option<String>,
	delete_view_url: Option<String>,
	use_slug: bool,
	engine: Arc<TemplateEngine>,
	resolver: Option<Arc<dyn UrlResolver>>,
	_row: PhantomData<fn(&R)>,
}

impl<R> ActionsColumn<R> {
	/// Column with the built-in template and no routes
	pub fn new(name: impl Into<String>) -> Self {
		Self::builder(name).build()
	}

	/// Starts building a column called `name`
	pub fn builder(name: impl Into<String>) -> ActionsColumnBuilder<R> {
		ActionsColumnBuilder::new(name)
	}

	/// Builds a column from its settings-file form
	pub fn from_config(name: impl Into<String>, config: ActionsColumnConfig) -> Self {
		ActionsColumnBuilder {
			name: name.into(),
			config,
			engine: None,
			resolver: None,
			_row: PhantomData,
		}
		.build()
	}

	/// Inline template source, if configured
	pub fn template_code(&self) -> Option<&str> {
		self.template_code.as_deref()
	}

	/// Template name; the built-in one when nothing was configured
	pub fn template_name(&self) -> Option<&str> {
		self.template_name.as_deref()
	}

	/// Route name of the update view
	pub fn update_view_url(&self) -> Option<&str> {
		self.update_view_url.as_deref()
	}

	/// Route name of the detail view
	pub fn detail_view_url(&self) -> Option<&str> {
		self.detail_view_url.as_deref()
	}

	/// Route name of the delete view
	pub fn delete_view_url(&self) -> Option<&str> {
		self.delete_view_url.as_deref()
	}

	/// Whether rows are identified by slug instead of primary key
	pub fn use_slug(&self) -> bool {
		self.use_slug
	}

	/// Generic column options
	pub fn options(&self) -> &ColumnOptions {
		&self.options
	}

	/// Engine the templates render through
	pub fn engine(&self) -> &Arc<TemplateEngine> {
		&self.engine
	}

	fn row_argument(&self, record: &R) -> TableResult<Value>
	where
		R: Record,
	{
		let (arg, attribute) = if self.use_slug {
			(record.slug(), "slug")
		} else {
			(record.pk(), "pk")
		};
		arg.ok_or_else(|| TableError::MissingAttribute {
			column: self.name.clone(),
			attribute,
		})
	}

	fn resolve(&self, route: Option<&str>, arg: &Value) -> Value {
		let Some(route) = route else {
			return Value::Null;
		};
		let url = self
			.resolver
			.as_ref()
			.and_then(|resolver| resolver.reverse(route, arg))
			.unwrap_or_else(|| route.to_string());
		Value::String(url)
	}

	fn cell_frame(
		&self,
		record: &R,
		value: &Value,
		column: &BoundColumn,
		arg: Value,
	) -> TableResult<Frame>
	where
		R: Record,
	{
		let mut frame = Frame::new();
		frame.insert("default".to_string(), column.default.clone());
		frame.insert("record".to_string(), serde_json::to_value(record)?);
		frame.insert("value".to_string(), value.clone());
		frame.insert(
			"update_view_url_resolved".to_string(),
			self.resolve(self.update_view_url.as_deref(), &arg),
		);
		frame.insert(
			"detail_view_url_resolved".to_string(),
			self.resolve(self.detail_view_url.as_deref(), &arg),
		);
		frame.insert(
			"delete_view_url_resolved".to_string(),
			self.resolve(self.delete_view_url.as_deref(), &arg),
		);
		frame.insert("arg".to_string(), arg);
		Ok(frame)
	}
}

impl<R> Column for ActionsColumn<R>
where
	R: Record,
{
	type Row = R;

	fn name(&self) -> &str {
		&self.name
	}

	fn header(&self) -> &str {
		self.options.verbose_name.as_deref().unwrap_or(&self.name)
	}

	fn value(&self, row: &R) -> Value {
		accessor_value(row, &self.name)
	}

	/// Renders the action links for `row`
	///
	/// The frame pushed onto the render context is popped again before this
	/// returns, on success and on error alike.
	fn render(
		&self,
		row: &R,
		table: &mut RenderPass<'_>,
		value: &Value,
		column: &BoundColumn,
	) -> TableResult<String> {
		let mut fresh = None;
		let context = match table.context_mut() {
			Some(context) => context,
			None => fresh.insert(RenderContext::new()),
		};

		let arg = self.row_argument(row)?;
		let frame = self.cell_frame(row, value, column, arg)?;

		let scope = context.scope(frame);
		let rendered = match self.template_code.as_deref() {
			Some(code) => {
				tracing::debug!(column = %self.name, "rendering inline actions template");
				self.engine.render_str(code, &scope)
			}
			None => {
				let name = self.template_name.as_deref().unwrap_or(DEFAULT_TEMPLATE_NAME);
				tracing::debug!(column = %self.name, template = name, "rendering actions template");
				self.engine.render_to_string(name, &scope)
			}
		};
		drop(scope);

		Ok(rendered?)
	}

	fn orderable(&self) -> bool {
		self.options.orderable.unwrap_or(false)
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

	fn empty_values(&self) -> &[Value] {
		&[]
	}
}

impl<R> Debug for ActionsColumn<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ActionsColumn")
			.field("name", &self.name)
			.field("template_code", &self.template_code)
			.field("template_name", &self.template_name)
			.field("update_view_url", &self.update_view_url)
			.field("detail_view_url", &self.detail_view_url)
			.field("delete_view_url", &self.delete_view_url)
			.field("use_slug", &self.use_slug)
			.field("options", &self.options)
			.field("resolver", &self.resolver.is_some())
			.finish_non_exhaustive()
	}
}

/// Builder for [`ActionsColumn`]
///
/// `template_code` and `template_name` are alternatives. If both are set the
/// inline source is rendered. Empty strings count as unset.
pub struct ActionsColumnBuilder<R> {
	name: String,
	config: ActionsColumnConfig,
	engine: Option<Arc<TemplateEngine>>,
	resolver: Option<Arc<dyn UrlResolver>>,
	_row: PhantomData<fn(&R)>,
}

impl<R> ActionsColumnBuilder<R> {
	/// Creates a builder for a column called `name`
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			config: ActionsColumnConfig::default(),
			engine: None,
			resolver: None,
			_row: PhantomData,
		}
	}

	/// Inline template source
	pub fn template_code(mut self, code: impl Into<String>) -> Self {
		self.config.template_code = Some(code.into());
		self
	}

	/// Template name, looked up through the engine
	pub fn template_name(mut self, name: impl Into<String>) -> Self {
		self.config.template_name = Some(name.into());
		self
	}

	/// Route name of the update view
	pub fn update_view_url(mut self, route: impl Into<String>) -> Self {
		self.config.update_view_url = Some(route.into());
		self
	}

	/// Route name of the detail view
	pub fn detail_view_url(mut self, route: impl Into<String>) -> Self {
		self.config.detail_view_url = Some(route.into());
		self
	}

	/// Route name of the delete view
	pub fn delete_view_url(mut self, route: impl Into<String>) -> Self {
		self.config.delete_view_url = Some(route.into());
		self
	}

	/// Identify rows by slug instead of primary key
	pub fn use_slug(mut self, use_slug: bool) -> Self {
		self.config.use_slug = use_slug;
		self
	}

	/// Whether the column can be ordered (default: false)
	pub fn orderable(mut self, orderable: bool) -> Self {
		self.config.column.orderable = Some(orderable);
		self
	}

	/// Header text
	pub fn verbose_name(mut self, verbose_name: impl Into<String>) -> Self {
		self.config.column.verbose_name = Some(verbose_name.into());
		self
	}

	/// Fallback value exposed to the template as `default`
	pub fn default(mut self, default: impl Into<Value>) -> Self {
		self.config.column.default = default.into();
		self
	}

	/// Whether the column is shown
	pub fn visible(mut self, visible: bool) -> Self {
		self.config.column.visible = visible;
		self
	}

	/// CSS classes for the column's cells
	pub fn css_classes(mut self, css_classes: impl Into<String>) -> Self {
		self.config.column.css_classes = css_classes.into();
		self
	}

	/// Replaces all generic column options
	pub fn options(mut self, options: ColumnOptions) -> Self {
		self.config.column = options;
		self
	}

	/// Engine to render through instead of the shared built-in one
	pub fn engine(mut self, engine: Arc<TemplateEngine>) -> Self {
		self.engine = Some(engine);
		self
	}

	/// Reverses route names into URLs instead of passing them through
	pub fn url_resolver(mut self, resolver: impl UrlResolver + 'static) -> Self {
		self.resolver = Some(Arc::new(resolver));
		self
	}

	/// Finishes the column
	pub fn build(self) -> ActionsColumn<R> {
		let ActionsColumnConfig {
			template_code,
			template_name,
			update_view_url,
			detail_view_url,
			delete_view_url,
			use_slug,
			column,
		} = self.config;

		let template_code = template_code.filter(|code| !code.is_empty());
		let mut template_name = template_name.filter(|name| !name.is_empty());
		if template_code.is_none() && template_name.is_none() {
			template_name = Some(DEFAULT_TEMPLATE_NAME.to_string());
		}

		ActionsColumn {
			name: self.name,
			options: column,
			template_code,
			template_name,
			update_view_url,
			detail_view_url,
			delete_view_url,
			use_slug,
			engine: self.engine.unwrap_or_else(default_engine),
			resolver: self.resolver,
			_row: PhantomData,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	type JsonColumn = ActionsColumn<Value>;

	#[rstest]
	fn test_default_template_name_when_nothing_configured() {
		let column = JsonColumn::new("actions");

		assert_eq!(column.template_name(), Some(DEFAULT_TEMPLATE_NAME));
		assert_eq!(column.template_code(), None);
	}

	#[rstest]
	fn test_inline_source_keeps_name_unset() {
		let column = JsonColumn::builder("actions")
			.template_code("{{ value }}")
			.build();

		assert_eq!(column.template_name(), None);
		assert_eq!(column.template_code(), Some("{{ value }}"));
	}

	#[rstest]
	fn test_explicit_template_name_is_kept() {
		let column = JsonColumn::builder("actions")
			.template_name("widgets/actions.html")
			.build();

		assert_eq!(column.template_name(), Some("widgets/actions.html"));
	}

	#[rstest]
	#[case(Some(""), None)]
	#[case(None, Some(""))]
	#[case(Some(""), Some(""))]
	fn test_empty_strings_count_as_unset(
		#[case] code: Option<&str>,
		#[case] name: Option<&str>,
	) {
		let mut builder = JsonColumn::builder("actions");
		if let Some(code) = code {
			builder = builder.template_code(code);
		}
		if let Some(name) = name {
			builder = builder.template_name(name);
		}

		let column = builder.build();

		assert_eq!(column.template_code(), None);
		assert_eq!(column.template_name(), Some(DEFAULT_TEMPLATE_NAME));
	}

	#[rstest]
	fn test_not_orderable_by_default() {
		assert!(!JsonColumn::new("actions").orderable());
		assert!(
			JsonColumn::builder("actions")
				.orderable(true)
				.build()
				.orderable()
		);
	}

	#[rstest]
	fn test_no_empty_values() {
		let column = JsonColumn::new("actions");

		assert!(column.empty_values().is_empty());
		assert!(!column.is_empty_value(&Value::Null));
	}

	#[rstest]
	fn test_header_falls_back_to_name() {
		assert_eq!(JsonColumn::new("actions").header(), "actions");
		assert_eq!(
			JsonColumn::builder("actions")
				.verbose_name("Row actions")
				.build()
				.header(),
			"Row actions"
		);
	}

	#[rstest]
	fn test_resolve_passes_route_through_without_resolver() {
		let column = JsonColumn::builder("actions")
			.update_view_url("widget-update")
			.build();

		assert_eq!(
			column.resolve(column.update_view_url(), &json!(42)),
			json!("widget-update")
		);
		assert_eq!(column.resolve(None, &json!(42)), Value::Null);
	}

	#[rstest]
	fn test_row_argument_by_mode() {
		let record = json!({"id": 42, "slug": "abc"});

		assert_eq!(JsonColumn::new("a").row_argument(&record).unwrap(), json!(42));
		assert_eq!(
			JsonColumn::builder("a")
				.use_slug(true)
				.build()
				.row_argument(&record)
				.unwrap(),
			json!("abc")
		);
	}

	#[rstest]
	#[case(json!({"id": 1, "slug": null}), true, Value::Null)]
	#[case(json!({"id": 1, "slug": 5}), true, json!(5))]
	#[case(json!({"pk": null, "name": "x"}), false, Value::Null)]
	fn test_present_attribute_is_used_even_without_value(
		#[case] record: Value,
		#[case] use_slug: bool,
		#[case] expected: Value,
	) {
		let column = JsonColumn::builder("a").use_slug(use_slug).build();

		assert_eq!(column.row_argument(&record).unwrap(), expected);
	}

	#[rstest]
	#[case(json!({"id": 1}), true, "slug")]
	#[case(json!({"name": "x"}), false, "pk")]
	fn test_absent_attribute_is_missing(
		#[case] record: Value,
		#[case] use_slug: bool,
		#[case] expected: &str,
	) {
		let column = JsonColumn::builder("a").use_slug(use_slug).build();

		let error = column.row_argument(&record).unwrap_err();

		assert!(
			matches!(error, TableError::MissingAttribute { attribute, .. } if attribute == expected)
		);
	}
}
