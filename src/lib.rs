//! # Vitrine
//!
//! Render structured models as HTML: a read-only table for display, or an
//! editable form whose inputs carry the model's validation constraints and,
//! optionally, htmx attributes for live updates.
//!
//! ## Crates
//!
//! - [`schema`] (`vitrine-schema`): declared types, values, field descriptors and the [`Model`] trait
//! - [`render`] (`vitrine-render`): classification, recursion and HTML output
//!
//! ## Quick Example
//!
//! ```rust
//! use vitrine::prelude::*;
//!
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! impl Model for User {
//!     fn model_name(&self) -> &str {
//!         "User"
//!     }
//!
//!     fn fields(&self) -> Vec<FieldDescriptor> {
//!         vec![
//!             FieldDescriptor::new("name", DeclaredType::Text)
//!                 .with_constraints(FieldConstraints::new().min_length(3).max_length(50))
//!                 .with_value(self.name.clone()),
//!             FieldDescriptor::new("age", DeclaredType::Integer)
//!                 .with_constraints(FieldConstraints::new().ge(0))
//!                 .with_value(self.age),
//!         ]
//!     }
//! }
//!
//! let user = User { name: "John Doe".into(), age: 30 };
//!
//! // Read-only table
//! let table = render_html(&user, &RenderOptions::new())?;
//! assert!(table.contains(r#"<td class="field-value">John Doe</td>"#));
//!
//! // Editable form posting each change back to the server
//! let form = render_html(
//!     &user,
//!     &RenderOptions::new()
//!         .editable(true)
//!         .with_theme("dark")
//!         .with_live_update("per-field"),
//! )?;
//! assert!(form.contains(r#"minlength="3" maxlength="50""#));
//! assert!(form.contains(r#"hx-post="/update-field?field=age""#));
//! # Ok::<(), vitrine::ConfigurationError>(())
//! ```
//!
//! ## Configuration
//!
//! [`RenderOptions`] can also be loaded from TOML:
//!
//! ```toml
//! editable = true
//! theme = "light"
//! live_update = "whole-form"
//! max_depth = 2
//! submit_url = "/users/42"
//! ```

pub use vitrine_render as render;
pub use vitrine_schema as schema;

pub use vitrine_render::{
	ConfigurationError, FieldKind, LiveUpdateMode, RenderConfig, RenderOptions, Stylesheet,
	model_to_html, render as render_html, render_with_config,
};
pub use vitrine_schema::{
	DeclaredType, EnumType, FieldConstraints, FieldDescriptor, Literal, Model, Record, Value,
};

/// Convenient re-exports for defining and rendering models
pub mod prelude {
	pub use crate::{
		ConfigurationError, DeclaredType, EnumType, FieldConstraints, FieldDescriptor, Literal,
		LiveUpdateMode, Model, Record, RenderOptions, Stylesheet, Value, model_to_html,
		render_html,
	};
}
