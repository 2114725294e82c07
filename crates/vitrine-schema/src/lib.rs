//! Schema boundary for Vitrine
//!
//! This crate holds the read-only description of a model instance that the
//! renderer consumes:
//!
//! - [`DeclaredType`]: the static type of each field
//! - [`FieldConstraints`]: validation metadata (length, numeric bounds, pattern)
//! - [`FieldDescriptor`]: name, type, constraints, value and default of one field
//! - [`Record`] and [`Model`]: an ordered list of fields and the trait that produces it
//! - [`Value`]: the runtime value tree
//!
//! # Architecture
//!
//! ```mermaid
//! graph LR
//!     M[Model] -->|to_record| R[Record]
//!     R --> F[FieldDescriptor]
//!     F --> T[DeclaredType]
//!     F --> C[FieldConstraints]
//!     F --> V[Value]
//!     V -->|Record variant| R
//! ```

pub mod field;
pub mod model;
pub mod types;
pub mod value;

pub use field::{DefaultFactory, DefaultValue, FieldConstraints, FieldDescriptor};
pub use model::{Model, Record};
pub use types::{DeclaredType, EnumType, EnumVariant, Literal};
pub use value::Value;
