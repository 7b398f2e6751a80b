use proptest::prelude::*;
use reinhardt_templates::{
	FileSystemTemplateLoader, Frame, RenderContext, TemplateEngine, TemplateError,
};
use rstest::*;
use serde_json::{Value, json};
use std::fs;
use tempfile::TempDir;

#[fixture]
fn page_context() -> RenderContext {
	let mut context = RenderContext::new();
	context.insert("site_name", json!("Reinhardt"));
	context.insert("value", json!("page-level"));
	context
}

#[fixture]
fn template_dir() -> TempDir {
	let dir = TempDir::new().unwrap();
	fs::create_dir_all(dir.path().join("widgets")).unwrap();
	fs::write(
		dir.path().join("widgets/cell.html"),
		"{{ site_name }}|{{ value }}",
	)
	.unwrap();
	fs::write(dir.path().join("widgets/broken.html"), "{{ value").unwrap();
	dir
}

fn cell_frame(value: &str) -> Frame {
	let mut frame = Frame::new();
	frame.insert("value".to_string(), json!(value));
	frame
}

#[rstest]
fn test_loaded_template_sees_scoped_and_page_variables(
	mut page_context: RenderContext,
	template_dir: TempDir,
) {
	// Arrange
	let engine = TemplateEngine::with_loader(FileSystemTemplateLoader::new(template_dir.path()));

	// Act
	let rendered = {
		let scope = page_context.scope(cell_frame("cell-level"));
		engine.render_to_string("widgets/cell.html", &scope).unwrap()
	};

	// Assert
	assert_eq!(rendered, "Reinhardt|cell-level");
	assert_eq!(page_context.get("value"), Some(&json!("page-level")));
	assert!(engine.has_template("widgets/cell.html"));
}

#[rstest]
fn test_failed_render_leaves_context_untouched(
	mut page_context: RenderContext,
	template_dir: TempDir,
) {
	// Arrange
	let engine = TemplateEngine::with_loader(FileSystemTemplateLoader::new(template_dir.path()));
	let before = page_context.clone();

	// Act
	let result = {
		let scope = page_context.scope(cell_frame("cell-level"));
		engine.render_to_string("widgets/broken.html", &scope)
	};

	// Assert
	assert!(matches!(result, Err(TemplateError::Render { .. })));
	assert_eq!(page_context, before);
}

#[rstest]
fn test_loader_miss_is_not_found(template_dir: TempDir) {
	let engine = TemplateEngine::with_loader(FileSystemTemplateLoader::new(template_dir.path()));

	let error = engine
		.render_to_string("widgets/unknown.html", &RenderContext::new())
		.unwrap_err();

	assert!(error.is_not_found());
}

fn arb_frame() -> impl Strategy<Value = Frame> {
	prop::collection::btree_map("[a-z]{1,6}", any::<i64>(), 0..5).prop_map(|entries| {
		entries
			.into_iter()
			.map(|(key, value)| (key, Value::from(value)))
			.collect()
	})
}

proptest! {
	#[test]
	fn prop_nested_scopes_restore_context(
		base in arb_frame(),
		outer in arb_frame(),
		inner in prop::collection::vec(arb_frame(), 0..4),
	) {
		let mut context = RenderContext::from_map(base);
		let before = context.clone();

		{
			let mut scope = context.scope(outer);
			for frame in inner {
				scope.push(frame);
			}
		}

		prop_assert_eq!(context, before);
	}
}
