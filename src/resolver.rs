//! Route reversal for action links
//!
//! By default an [`ActionsColumn`](crate::ActionsColumn) hands the configured
//! route names to its template untouched. A [`UrlResolver`] installed on the
//! column turns them into URLs for the current row instead.

use reinhardt_tables::value_to_text;
use serde_json::Value;
use std::collections::HashMap;

/// Reverses a route name into a URL for one row
///
/// Closures with the same signature implement this trait.
pub trait UrlResolver: Send + Sync {
	/// Returns the URL of `route` for the row identified by `arg`, or `None`
	/// if the route is unknown.
	fn reverse(&self, route: &str, arg: &Value) -> Option<String>;
}

impl<F> UrlResolver for F
where
	F: Fn(&str, &Value) -> Option<String> + Send + Sync,
{
	fn reverse(&self, route: &str, arg: &Value) -> Option<String> {
		self(route, arg)
	}
}

/// Route name to URL pattern map
///
/// Patterns use `{pk}`, `{slug}` or `{arg}` placeholders, all replaced by the
/// row argument. Other placeholders are left as they are.
///
/// # Example
///
/// ```rust
/// use reinhardt_actionscolumn::{RoutePatterns, UrlResolver};
/// use serde_json::json;
///
/// let routes = RoutePatterns::new().route("widget-update", "/widgets/{pk}/edit/");
///
/// assert_eq!(
///     routes.reverse("widget-update", &json!(42)).as_deref(),
///     Some("/widgets/42/edit/"),
/// );
/// assert_eq!(routes.reverse("unknown", &json!(42)), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoutePatterns {
	patterns: HashMap<String, String>,
}

impl RoutePatterns {
	/// Creates an empty route map
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds `name` → `pattern`, builder style
	pub fn route(mut self, name: impl Into<String>, pattern: impl Into<String>) -> Self {
		self.insert(name, pattern);
		self
	}

	/// Adds or replaces `name` → `pattern`
	pub fn insert(&mut self, name: impl Into<String>, pattern: impl Into<String>) {
		self.patterns.insert(name.into(), pattern.into());
	}

	/// Returns the pattern registered for `name`
	pub fn pattern(&self, name: &str) -> Option<&str> {
		self.patterns.get(name).map(String::as_str)
	}
}

impl UrlResolver for RoutePatterns {
	fn reverse(&self, route: &str, arg: &Value) -> Option<String> {
		let pattern = self.patterns.get(route)?;
		Some(substitute_arg(pattern, &value_to_text(arg)))
	}
}

/// Single pass over `pattern`, replacing row-argument placeholders
fn substitute_arg(pattern: &str, arg: &str) -> String {
	let mut result = String::with_capacity(pattern.len() + arg.len());
	let mut chars = pattern.chars();

	while let Some(ch) = chars.next() {
		if ch != '{' {
			result.push(ch);
			continue;
		}
		let name: String = chars.by_ref().take_while(|&c| c != '}').collect();
		match name.as_str() {
			"pk" | "slug" | "arg" => result.push_str(arg),
			other => {
				result.push('{');
				result.push_str(other);
				result.push('}');
			}
		}
	}

	result
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case("/widgets/{pk}/", "42", "/widgets/42/")]
	#[case("/widgets/{slug}/delete/", "gear", "/widgets/gear/delete/")]
	#[case("/w/{arg}/{arg}/", "7", "/w/7/7/")]
	#[case("/w/{other}/{pk}/", "7", "/w/{other}/7/")]
	#[case("/static/", "7", "/static/")]
	fn test_substitute_arg(#[case] pattern: &str, #[case] arg: &str, #[case] expected: &str) {
		assert_eq!(substitute_arg(pattern, arg), expected);
	}

	#[rstest]
	fn test_string_arg_is_not_quoted() {
		let routes = RoutePatterns::new().route("detail", "/widgets/{slug}/");

		assert_eq!(
			routes.reverse("detail", &json!("gear")).as_deref(),
			Some("/widgets/gear/")
		);
	}

	#[rstest]
	fn test_closure_resolver() {
		let resolver = |route: &str, arg: &Value| Some(format!("/{route}/{arg}/"));

		assert_eq!(
			UrlResolver::reverse(&resolver, "edit", &json!(1)).as_deref(),
			Some("/edit/1/")
		);
	}
}
