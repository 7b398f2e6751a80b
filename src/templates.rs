//! Built-in templates

use once_cell::sync::Lazy;
use reinhardt_templates::{TemplateEngine, TemplateResult};
use std::sync::Arc;

/// Template used when a column configures neither inline source nor a name.
pub const DEFAULT_TEMPLATE_NAME: &str = "django_tables2_actionscolumn/action_column.html";

const DEFAULT_TEMPLATE_SOURCE: &str =
	include_str!("../templates/django_tables2_actionscolumn/action_column.html");

static DEFAULT_ENGINE: Lazy<Arc<TemplateEngine>> = Lazy::new(|| {
	let engine = TemplateEngine::new();
	register_builtin_templates(&engine).expect("Failed to add built-in action column template");
	Arc::new(engine)
});

/// Registers the built-in templates on `engine`.
///
/// Call this on engines built with a file loader so columns relying on
/// [`DEFAULT_TEMPLATE_NAME`] keep working.
pub fn register_builtin_templates(engine: &TemplateEngine) -> TemplateResult<()> {
	engine.add_raw_template(DEFAULT_TEMPLATE_NAME, DEFAULT_TEMPLATE_SOURCE)
}

/// Shared engine holding only the built-in templates.
pub fn default_engine() -> Arc<TemplateEngine> {
	Arc::clone(&DEFAULT_ENGINE)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_engine_has_builtin_template() {
		assert!(default_engine().has_template(DEFAULT_TEMPLATE_NAME));
	}

	#[test]
	fn test_register_builtin_templates() {
		let engine = TemplateEngine::new();

		register_builtin_templates(&engine).unwrap();

		assert!(engine.has_template(DEFAULT_TEMPLATE_NAME));
	}
}
