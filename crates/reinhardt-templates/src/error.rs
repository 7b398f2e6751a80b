//! Template error types.

use thiserror::Error;

/// Result type for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Template loading and rendering errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TemplateError {
	/// Named template is neither registered nor available from the loader.
	#[error("template not found: {0}")]
	NotFound(String),

	/// Template failed to compile or to render against the context.
	#[error("failed to render template '{name}': {source}")]
	Render {
		/// Template name (`<inline>` for inline sources).
		name: String,
		/// Underlying Tera error.
		#[source]
		source: tera::Error,
	},

	/// Template file exists but could not be read.
	#[error("cannot read template '{name}': {source}")]
	Io {
		/// Template name as requested.
		name: String,
		/// Underlying IO error.
		#[source]
		source: std::io::Error,
	},
}

impl TemplateError {
	pub(crate) fn render(name: impl Into<String>, source: tera::Error) -> Self {
		Self::Render {
			name: name.into(),
			source,
		}
	}

	/// Returns `true` if this is a missing-template error.
	pub fn is_not_found(&self) -> bool {
		matches!(self, Self::NotFound(_))
	}
}
