//! # Reinhardt Templates
//!
//! Template engine for Reinhardt tables using Tera.
//!
//! ## Features
//!
//! - Inline template sources compiled on demand: [`TemplateEngine::render_str`]
//! - Named templates, registered or loaded from disk: [`TemplateEngine::render_to_string`]
//! - A layered render context with scoped frames: [`RenderContext::scope`]
//! - File system loader with directory traversal checks: [`FileSystemTemplateLoader`]
//! - Django-compatible autoescaping that leaves `/` alone: [`escape_html`]
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_templates::{RenderContext, TemplateEngine};
//! use serde_json::{Map, json};
//!
//! let engine = TemplateEngine::new();
//! let mut context = RenderContext::new();
//! context.insert("site", json!("Reinhardt"));
//!
//! let mut frame = Map::new();
//! frame.insert("value".to_string(), json!("X"));
//!
//! {
//!     let scope = context.scope(frame);
//!     let html = engine.render_str("{{ site }}: {{ value }}", &scope).unwrap();
//!     assert_eq!(html, "Reinhardt: X");
//! }
//!
//! // The frame is gone once the scope is dropped
//! assert!(!context.contains_key("value"));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod context;
pub mod engine;
pub mod error;
pub mod escaping;
pub mod fs_loader;

pub use context::{ContextScope, Frame, RenderContext};
pub use engine::TemplateEngine;
pub use error::{TemplateError, TemplateResult};
pub use escaping::escape_html;
pub use fs_loader::FileSystemTemplateLoader;
