//! Row records
//!
//! Columns that link to a row need a stable identifier for it. [`Record`]
//! exposes the two identifiers Django-style URLs use: the primary key and
//! the slug.

use serde::Serialize;
use serde_json::Value;

/// A row's underlying data object
///
/// `Serialize` is required so the whole record can be exposed to templates
/// as `record`.
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::Record;
/// use serde::Serialize;
/// use serde_json::{Value, json};
///
/// #[derive(Serialize)]
/// struct Article {
///     id: i64,
///     slug: String,
/// }
///
/// impl Record for Article {
///     fn pk(&self) -> Option<Value> {
///         Some(json!(self.id))
///     }
///
///     fn slug(&self) -> Option<Value> {
///         Some(json!(self.slug))
///     }
/// }
/// ```
///
/// `None` means the record has no such attribute at all. A record that has
/// the attribute without a value (an unsaved row, a blank slug) returns
/// `Some(Value::Null)`.
pub trait Record: Serialize {
	/// Primary key attribute
	fn pk(&self) -> Option<Value>;

	/// Slug attribute; records without one keep the default
	fn slug(&self) -> Option<Value> {
		None
	}
}

/// JSON objects act as records: `pk` (or `id`) is the primary key and
/// `slug` the slug. A non-null `pk` wins over `id`.
impl Record for Value {
	fn pk(&self) -> Option<Value> {
		match (self.get("pk"), self.get("id")) {
			(Some(pk), _) if !pk.is_null() => Some(pk.clone()),
			(_, Some(id)) => Some(id.clone()),
			(pk, None) => pk.cloned(),
		}
	}

	fn slug(&self) -> Option<Value> {
		self.get("slug").cloned()
	}
}

impl<T> Record for &T
where
	T: Record + ?Sized,
{
	fn pk(&self) -> Option<Value> {
		(**self).pk()
	}

	fn slug(&self) -> Option<Value> {
		(**self).slug()
	}
}

/// Reads the field `name` from the serialized form of `row`
///
/// Returns `null` when the row does not serialize to an object or has no
/// such field.
pub fn accessor_value<R>(row: &R, name: &str) -> Value
where
	R: Serialize + ?Sized,
{
	match serde_json::to_value(row) {
		Ok(Value::Object(mut fields)) => fields.remove(name).unwrap_or(Value::Null),
		_ => Value::Null,
	}
}
