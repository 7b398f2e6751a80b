//! HTML escaping for autoescaped output
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`
//!
//! Everything else, `/` included, is emitted as is so URLs survive
//! autoescaping unchanged.

/// Escape HTML special characters
///
/// Installed as the escape function of every [`TemplateEngine`](crate::TemplateEngine).
///
/// # Examples
///
/// ```
/// use reinhardt_templates::escape_html;
///
/// assert_eq!(escape_html("<b>n/a</b>"), "&lt;b&gt;n/a&lt;/b&gt;");
/// assert_eq!(escape_html("/w/3/?next=a&b"), "/w/3/?next=a&amp;b");
/// ```
pub fn escape_html(s: &str) -> String {
	let mut escaped = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'<' => escaped.push_str("&lt;"),
			'>' => escaped.push_str("&gt;"),
			'&' => escaped.push_str("&amp;"),
			'"' => escaped.push_str("&quot;"),
			'\'' => escaped.push_str("&#x27;"),
			_ => escaped.push(c),
		}
	}
	escaped
}
