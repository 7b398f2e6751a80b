//! Tera-based template engine
//!
//! [`TemplateEngine`] renders two kinds of templates against a
//! [`RenderContext`]:
//!
//! - inline sources, compiled for the single call ([`TemplateEngine::render_str`])
//! - named templates, either registered up front with
//!   [`TemplateEngine::add_raw_template`] or read through a
//!   [`FileSystemTemplateLoader`] the first time they are requested
//!   ([`TemplateEngine::render_to_string`])
//!
//! Named templates ending in `.html`, `.htm` or `.xml` are autoescaped, as are
//! inline sources. Escaping goes through [`escape_html`].

use crate::{FileSystemTemplateLoader, RenderContext, TemplateError, TemplateResult, escape_html};
use parking_lot::RwLock;
use tera::Tera;

const INLINE_TEMPLATE_NAME: &str = "<inline>";

fn new_tera() -> Tera {
	let mut tera = Tera::default();
	tera.set_escape_fn(escape_html);
	tera
}

/// Template engine shared by the columns of a table.
pub struct TemplateEngine {
	tera: RwLock<Tera>,
	loader: Option<FileSystemTemplateLoader>,
}

impl TemplateEngine {
	/// Creates an engine with no templates and no file loader.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_templates::TemplateEngine;
	///
	/// let engine = TemplateEngine::new();
	/// assert!(!engine.has_template("actions.html"));
	/// ```
	pub fn new() -> Self {
		Self {
			tera: RwLock::new(new_tera()),
			loader: None,
		}
	}

	/// Creates an engine that falls back to `loader` for unregistered names.
	pub fn with_loader(loader: FileSystemTemplateLoader) -> Self {
		Self {
			tera: RwLock::new(new_tera()),
			loader: Some(loader),
		}
	}

	/// Returns the file loader, if any.
	pub fn loader(&self) -> Option<&FileSystemTemplateLoader> {
		self.loader.as_ref()
	}

	/// Registers `source` under `name`, replacing any previous template.
	///
	/// # Errors
	///
	/// Returns [`TemplateError::Render`] if the source does not parse.
	pub fn add_raw_template(&self, name: &str, source: &str) -> TemplateResult<()> {
		self.tera
			.write()
			.add_raw_template(name, source)
			.map_err(|e| TemplateError::render(name, e))
	}

	/// Returns `true` if `name` is registered (loaded templates included).
	pub fn has_template(&self, name: &str) -> bool {
		self.tera.read().get_template_names().any(|n| n == name)
	}

	/// Compiles `source` and renders it against `context`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_templates::{RenderContext, TemplateEngine};
	/// use serde_json::json;
	///
	/// let engine = TemplateEngine::new();
	/// let mut context = RenderContext::new();
	/// context.insert("value", json!("X"));
	///
	/// assert_eq!(engine.render_str("{{ value }}", &context).unwrap(), "X");
	/// ```
	///
	/// # Errors
	///
	/// Returns [`TemplateError::Render`] on syntax errors and on runtime
	/// errors such as undefined variables.
	pub fn render_str(&self, source: &str, context: &RenderContext) -> TemplateResult<String> {
		let mut tera = new_tera();
		// every name ends with "", so the inline source is always escaped
		tera.autoescape_on(vec![""]);
		tera.render_str(source, &context.to_tera())
			.map_err(|e| TemplateError::render(INLINE_TEMPLATE_NAME, e))
	}

	/// Renders the template registered or loadable under `name`.
	///
	/// Templates read through the loader are registered so later calls skip
	/// the file system.
	///
	/// # Errors
	///
	/// - [`TemplateError::NotFound`] if no template is registered under `name`
	///   and the loader cannot provide it (or there is no loader)
	/// - [`TemplateError::Io`] if the loader found the file but could not read it
	/// - [`TemplateError::Render`] on syntax or runtime errors
	pub fn render_to_string(&self, name: &str, context: &RenderContext) -> TemplateResult<String> {
		if !self.has_template(name) {
			self.load_template(name)?;
		}

		self.tera
			.read()
			.render(name, &context.to_tera())
			.map_err(|e| TemplateError::render(name, e))
	}

	/// Reads `name` through the loader and registers it.
	///
	/// The write lock is held across the check and the load so concurrent
	/// misses register the file once.
	fn load_template(&self, name: &str) -> TemplateResult<()> {
		let mut tera = self.tera.write();
		if tera.get_template_names().any(|n| n == name) {
			return Ok(());
		}
		let loader = self
			.loader
			.as_ref()
			.ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
		let source = loader.load(name)?;
		tera.add_raw_template(name, &source)
			.map_err(|e| TemplateError::render(name, e))
	}
}

impl Default for TemplateEngine {
	fn default() -> Self {
		Self::new()
	}
}

impl std::fmt::Debug for TemplateEngine {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let tera = self.tera.read();
		let mut names: Vec<&str> = tera.get_template_names().collect();
		names.sort_unstable();
		f.debug_struct("TemplateEngine")
			.field("templates", &names)
			.field("loader", &self.loader)
			.finish()
	}
}
