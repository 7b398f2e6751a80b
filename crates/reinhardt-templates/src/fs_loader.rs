//! File system template loader
//!
//! Resolves template names such as `widgets/actions.html` to files below a
//! base directory, refusing names that would escape it.

use crate::{TemplateError, TemplateResult};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File system template loader
///
/// Template sources are cached by name unless the loader was built with
/// [`FileSystemTemplateLoader::new_without_cache`].
#[derive(Debug)]
pub struct FileSystemTemplateLoader {
	base_dir: PathBuf,
	cache: RwLock<HashMap<String, String>>,
	use_cache: bool,
}

impl FileSystemTemplateLoader {
	/// Create a new file system template loader
	///
	/// # Example
	///
	/// ```rust,no_run
	/// use reinhardt_templates::FileSystemTemplateLoader;
	/// use std::path::Path;
	///
	/// let loader = FileSystemTemplateLoader::new(Path::new("/app/templates"));
	/// ```
	pub fn new(base_dir: impl AsRef<Path>) -> Self {
		Self {
			base_dir: base_dir.as_ref().to_path_buf(),
			cache: RwLock::new(HashMap::new()),
			use_cache: true,
		}
	}

	/// Create a loader that reads the file on every call
	pub fn new_without_cache(base_dir: impl AsRef<Path>) -> Self {
		Self {
			use_cache: false,
			..Self::new(base_dir)
		}
	}

	/// Load a template source by name
	///
	/// # Errors
	///
	/// - [`TemplateError::NotFound`] if the name contains `..`, is absolute,
	///   resolves outside the base directory, does not exist or is a directory
	/// - [`TemplateError::Io`] if the file exists but cannot be read as UTF-8
	pub fn load(&self, name: &str) -> TemplateResult<String> {
		if self.use_cache {
			if let Some(content) = self.cache.read().get(name) {
				return Ok(content.clone());
			}
		}

		let full_path = self.validate_and_resolve_path(name)?;

		if !full_path.is_file() {
			return Err(TemplateError::NotFound(name.to_string()));
		}

		let content = fs::read_to_string(&full_path).map_err(|source| TemplateError::Io {
			name: name.to_string(),
			source,
		})?;

		if self.use_cache {
			self.cache.write().insert(name.to_string(), content.clone());
		}

		tracing::debug!(template = name, path = %full_path.display(), "loaded template from disk");
		Ok(content)
	}

	fn validate_and_resolve_path(&self, name: &str) -> TemplateResult<PathBuf> {
		let normalized_name = name.trim_start_matches('/');
		if normalized_name.trim().is_empty() {
			return Err(TemplateError::NotFound(name.to_string()));
		}

		for component in Path::new(normalized_name).components() {
			if matches!(
				component,
				Component::ParentDir | Component::RootDir | Component::Prefix(_)
			) {
				tracing::warn!(template = name, "rejected template name outside the template directory");
				return Err(TemplateError::NotFound(name.to_string()));
			}
		}

		let full_path = self.base_dir.join(normalized_name);

		// Symlinks may still point outside; compare canonical forms when both exist
		if let (Ok(canonical_full), Ok(canonical_base)) =
			(full_path.canonicalize(), self.base_dir.canonicalize())
		{
			if !canonical_full.starts_with(&canonical_base) {
				tracing::warn!(template = name, "template path escapes the template directory");
				return Err(TemplateError::NotFound(name.to_string()));
			}
		}

		Ok(full_path)
	}

	/// Clear the template cache
	pub fn clear_cache(&self) {
		self.cache.write().clear();
	}

	/// Get the base directory
	pub fn base_dir(&self) -> &Path {
		&self.base_dir
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use tempfile::TempDir;

	fn create_test_template(dir: &Path, name: &str, content: &str) {
		let file_path = dir.join(name);
		if let Some(parent) = file_path.parent() {
			fs::create_dir_all(parent).unwrap();
		}
		fs::write(file_path, content).unwrap();
	}

	#[rstest]
	fn test_load_template_from_subdirectory() {
		let temp_dir = TempDir::new().unwrap();
		create_test_template(
			temp_dir.path(),
			"widgets/actions.html",
			"<a href=\"{{ arg }}\">edit</a>",
		);

		let loader = FileSystemTemplateLoader::new(temp_dir.path());
		let content = loader.load("widgets/actions.html").unwrap();

		assert_eq!(content, "<a href=\"{{ arg }}\">edit</a>");
	}

	#[rstest]
	fn test_missing_template_is_not_found() {
		let temp_dir = TempDir::new().unwrap();
		let loader = FileSystemTemplateLoader::new(temp_dir.path());

		let error = loader.load("nonexistent.html").unwrap_err();

		assert!(error.is_not_found());
	}

	#[rstest]
	#[case("../etc/passwd")]
	#[case("./../test.html")]
	#[case("test/../../test.html")]
	#[case("")]
	#[case("   ")]
	#[case("///")]
	fn test_rejected_names(#[case] name: &str) {
		let temp_dir = TempDir::new().unwrap();
		let loader = FileSystemTemplateLoader::new(temp_dir.path());

		let result = loader.load(name);

		assert!(result.is_err(), "expected {name:?} to be rejected");
	}

	#[rstest]
	fn test_directory_instead_of_file() {
		let temp_dir = TempDir::new().unwrap();
		fs::create_dir_all(temp_dir.path().join("subdir")).unwrap();

		let loader = FileSystemTemplateLoader::new(temp_dir.path());

		assert!(loader.load("subdir").unwrap_err().is_not_found());
	}

	#[rstest]
	fn test_leading_slashes_are_stripped() {
		let temp_dir = TempDir::new().unwrap();
		create_test_template(temp_dir.path(), "test.html", "Test content");

		let loader = FileSystemTemplateLoader::new(temp_dir.path());

		assert_eq!(loader.load("///test.html").unwrap(), "Test content");
	}

	#[rstest]
	fn test_template_caching() {
		let temp_dir = TempDir::new().unwrap();
		create_test_template(temp_dir.path(), "cached.html", "Original content");
		let loader = FileSystemTemplateLoader::new(temp_dir.path());

		assert_eq!(loader.load("cached.html").unwrap(), "Original content");
		create_test_template(temp_dir.path(), "cached.html", "Modified content");
		assert_eq!(loader.load("cached.html").unwrap(), "Original content");

		loader.clear_cache();
		assert_eq!(loader.load("cached.html").unwrap(), "Modified content");
	}

	#[rstest]
	fn test_no_cache_loader_sees_changes() {
		let temp_dir = TempDir::new().unwrap();
		create_test_template(temp_dir.path(), "nocache.html", "First");
		let loader = FileSystemTemplateLoader::new_without_cache(temp_dir.path());

		assert_eq!(loader.load("nocache.html").unwrap(), "First");
		create_test_template(temp_dir.path(), "nocache.html", "Second");
		assert_eq!(loader.load("nocache.html").unwrap(), "Second");
	}

	#[rstest]
	fn test_non_utf8_file_is_io_error() {
		let temp_dir = TempDir::new().unwrap();
		fs::write(temp_dir.path().join("binary.html"), [0x00, 0xFF, 0xFE]).unwrap();
		let loader = FileSystemTemplateLoader::new(temp_dir.path());

		let error = loader.load("binary.html").unwrap_err();

		assert!(matches!(error, TemplateError::Io { .. }));
	}
}
