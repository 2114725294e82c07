//! HTML rendering engine for Vitrine
//!
//! Converts a [`Model`](vitrine_schema::Model) into semantic HTML: a read-only
//! table, or an editable form whose controls carry the field's validation
//! constraints and, optionally, htmx live-update attributes.
//!
//! # Features
//!
//! - **Classification**: every declared type maps to one [`FieldKind`](classify::FieldKind)
//! - **Constraints**: length, numeric bounds and patterns become HTML attributes
//! - **Recursion**: nested records, lists and mappings, with an optional depth bound
//! - **Live updates**: per-field or whole-form htmx attributes
//! - **Themes**: built-in `light` and `dark` stylesheets, or your own
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[render] --> B[RenderOptions::validate]
//!     B --> C[RenderConfig]
//!     A --> D[render_record]
//!     D --> E[classify]
//!     D --> F[extract]
//!     D --> G[element::build]
//!     D --> H[attrs::decorate]
//!     D -->|nested| D
//!     G --> I[widgets]
//! ```
//!
//! # Example
//!
//! ```rust
//! use vitrine_render::config::RenderOptions;
//! use vitrine_render::render;
//! use vitrine_schema::{DeclaredType, FieldConstraints, FieldDescriptor, Record};
//!
//! let user = Record::builder("User")
//!     .field("name", DeclaredType::Text, "John Doe")
//!     .descriptor(
//!         FieldDescriptor::new("age", DeclaredType::Integer)
//!             .with_constraints(FieldConstraints::new().ge(0))
//!             .with_value(30i64),
//!     );
//!
//! let form = render(&user, &RenderOptions::new().editable(true)).unwrap();
//! assert!(form.contains(r#"<input type="number" id="age" name="age" value="30" min="0" required />"#));
//! ```

#![warn(rustdoc::broken_intra_doc_links)]

pub mod attrs;
pub mod classify;
pub mod config;
pub mod constraints;
pub mod element;
pub mod error;
pub mod fragment;
pub mod html;
pub mod path;
pub mod recursor;
pub mod renderer;
pub mod themes;
pub mod widgets;

// Re-exports for convenience
pub use classify::{FieldKind, classify};
pub use config::{LiveUpdateMode, RenderConfig, RenderOptions, Stylesheet};
pub use error::{ConfigurationError, Result};
pub use fragment::Fragment;
pub use path::FieldPath;
pub use renderer::{model_to_html, render, render_with_config};
