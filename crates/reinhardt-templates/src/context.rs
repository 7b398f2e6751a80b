//! Layered render context
//!
//! A [`RenderContext`] is a stack of key/value frames. Lookups walk the stack
//! from the top, so a frame pushed for a single cell shadows the variables of
//! the enclosing page render without overwriting them. Frames pushed through
//! [`RenderContext::scope`] are removed when the returned [`ContextScope`]
//! drops, whether the render that used it succeeded or failed.

use serde_json::{Map, Value};
use std::ops::{Deref, DerefMut};

/// One layer of template variables.
pub type Frame = Map<String, Value>;

/// Stack of template variable frames shared across a render pass.
///
/// The bottom frame always exists and receives [`RenderContext::insert`]
/// calls made outside of any scope.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
	frames: Vec<Frame>,
}

impl RenderContext {
	/// Creates a context with a single empty frame.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_templates::RenderContext;
	///
	/// let context = RenderContext::new();
	/// assert_eq!(context.depth(), 1);
	/// ```
	pub fn new() -> Self {
		Self {
			frames: vec![Frame::new()],
		}
	}

	/// Creates a context whose bottom frame holds `frame`.
	pub fn from_map(frame: Frame) -> Self {
		Self {
			frames: vec![frame],
		}
	}

	/// Sets `key` in the topmost frame.
	pub fn insert(&mut self, key: impl Into<String>, value: Value) {
		// frames is never empty: pop() keeps the bottom frame
		if let Some(top) = self.frames.last_mut() {
			top.insert(key.into(), value);
		}
	}

	/// Looks `key` up, topmost frame first.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.frames.iter().rev().find_map(|frame| frame.get(key))
	}

	/// Returns `true` if any frame defines `key`.
	pub fn contains_key(&self, key: &str) -> bool {
		self.get(key).is_some()
	}

	/// Number of frames, including the bottom frame.
	pub fn depth(&self) -> usize {
		self.frames.len()
	}

	/// Pushes `frame` without a guard. Pair with [`RenderContext::pop`].
	pub fn push(&mut self, frame: Frame) {
		tracing::trace!(depth = self.frames.len() + 1, keys = frame.len(), "context push");
		self.frames.push(frame);
	}

	/// Removes and returns the topmost frame.
	///
	/// The bottom frame is never removed; `None` is returned instead.
	pub fn pop(&mut self) -> Option<Frame> {
		if self.frames.len() <= 1 {
			return None;
		}
		tracing::trace!(depth = self.frames.len() - 1, "context pop");
		self.frames.pop()
	}

	/// Pushes `frame` and returns a guard that restores the current depth on drop.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_templates::RenderContext;
	/// use serde_json::{Map, json};
	///
	/// let mut context = RenderContext::new();
	/// let mut frame = Map::new();
	/// frame.insert("record".to_string(), json!({"pk": 1}));
	///
	/// {
	///     let scope = context.scope(frame);
	///     assert!(scope.contains_key("record"));
	/// }
	/// assert!(!context.contains_key("record"));
	/// ```
	pub fn scope(&mut self, frame: Frame) -> ContextScope<'_> {
		let restore_depth = self.frames.len();
		self.push(frame);
		ContextScope {
			context: self,
			restore_depth,
		}
	}

	/// Merges all frames into one map, upper frames winning.
	pub fn flatten(&self) -> Frame {
		let mut merged = Frame::new();
		for frame in &self.frames {
			for (key, value) in frame {
				merged.insert(key.clone(), value.clone());
			}
		}
		merged
	}

	/// Builds the Tera context for the current state of the stack.
	pub fn to_tera(&self) -> tera::Context {
		let mut context = tera::Context::new();
		for (key, value) in self.flatten() {
			context.insert(key, &value);
		}
		context
	}
}

impl Default for RenderContext {
	fn default() -> Self {
		Self::new()
	}
}

impl From<Frame> for RenderContext {
	fn from(frame: Frame) -> Self {
		Self::from_map(frame)
	}
}

/// Guard for a frame pushed with [`RenderContext::scope`].
///
/// Dereferences to the context. On drop the stack is truncated back to the
/// depth it had before the push, which also discards frames pushed through
/// the guard and never popped.
#[derive(Debug)]
pub struct ContextScope<'a> {
	context: &'a mut RenderContext,
	restore_depth: usize,
}

impl Deref for ContextScope<'_> {
	type Target = RenderContext;

	fn deref(&self) -> &RenderContext {
		self.context
	}
}

impl DerefMut for ContextScope<'_> {
	fn deref_mut(&mut self) -> &mut RenderContext {
		self.context
	}
}

impl Drop for ContextScope<'_> {
	fn drop(&mut self) {
		tracing::trace!(depth = self.restore_depth, "context scope released");
		self.context.frames.truncate(self.restore_depth.max(1));
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	fn frame(pairs: &[(&str, Value)]) -> Frame {
		pairs
			.iter()
			.map(|(key, value)| (key.to_string(), value.clone()))
			.collect()
	}

	#[rstest]
	fn test_lookup_prefers_top_frame() {
		// Arrange
		let mut context = RenderContext::new();
		context.insert("value", json!("outer"));

		// Act
		context.push(frame(&[("value", json!("inner"))]));

		// Assert
		assert_eq!(context.get("value"), Some(&json!("inner")));
		context.pop();
		assert_eq!(context.get("value"), Some(&json!("outer")));
	}

	#[rstest]
	fn test_bottom_frame_is_never_popped() {
		let mut context = RenderContext::new();
		context.insert("site", json!("x"));

		assert!(context.pop().is_none());
		assert_eq!(context.depth(), 1);
		assert!(context.contains_key("site"));
	}

	#[rstest]
	fn test_scope_restores_depth_on_drop() {
		let mut context = RenderContext::new();
		let before = context.clone();

		{
			let mut scope = context.scope(frame(&[("record", json!({"pk": 1}))]));
			scope.push(frame(&[("leaked", json!(true))]));
			assert_eq!(scope.depth(), 3);
		}

		assert_eq!(context, before);
	}

	#[rstest]
	fn test_insert_inside_scope_is_discarded() {
		let mut context = RenderContext::new();

		{
			let mut scope = context.scope(Frame::new());
			scope.insert("temporary", json!(1));
			assert!(scope.contains_key("temporary"));
		}

		assert!(!context.contains_key("temporary"));
	}

	#[rstest]
	fn test_flatten_merges_upper_frames_last() {
		let mut context = RenderContext::from_map(frame(&[("a", json!(1)), ("b", json!(1))]));
		context.push(frame(&[("b", json!(2))]));

		let merged = context.flatten();

		assert_eq!(merged.get("a"), Some(&json!(1)));
		assert_eq!(merged.get("b"), Some(&json!(2)));
	}

	#[rstest]
	fn test_to_tera_exposes_all_keys() {
		let mut context = RenderContext::new();
		context.insert("value", json!("X"));

		let tera_context = context.to_tera();

		assert_eq!(tera_context.get("value"), Some(&json!("X")));
	}
}
