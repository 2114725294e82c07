//! Declared field types
//!
//! A [`DeclaredType`] is the static description of what a field may hold, as
//! reported by the schema that owns the model. The renderer never inspects
//! values to decide a field's shape; it classifies the declared type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Static type of a model field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "of", rename_all = "snake_case")]
pub enum DeclaredType {
	/// UTF-8 text
	Text,
	/// Signed integer
	Integer,
	/// Floating-point number
	Float,
	/// Boolean flag
	Boolean,
	/// Calendar date without time
	Date,
	/// Date and time without timezone
	DateTime,
	/// Named enumeration with string-valued variants
	Enum(EnumType),
	/// Closed set of literal constants
	Literal(Vec<Literal>),
	/// Homogeneous sequence
	List(Box<DeclaredType>),
	/// Mapping from key type to value type
	Map(Box<DeclaredType>, Box<DeclaredType>),
	/// Nested record, identified by its type name
	Record(String),
	/// Nullable wrapper around another type
	Optional(Box<DeclaredType>),
	/// Raw byte blob
	Bytes,
	/// Unique identifier
	Uuid,
	/// Function or other callable
	Callable,
	/// Unconstrained value
	Any,
	/// Any other type the schema knows by name only
	Opaque(String),
}

impl DeclaredType {
	/// Sequence of `element`
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::DeclaredType;
	///
	/// let tags = DeclaredType::list(DeclaredType::Text);
	/// assert_eq!(tags, DeclaredType::List(Box::new(DeclaredType::Text)));
	/// ```
	pub fn list(element: DeclaredType) -> Self {
		Self::List(Box::new(element))
	}

	/// Mapping from `key` to `value`
	pub fn map(key: DeclaredType, value: DeclaredType) -> Self {
		Self::Map(Box::new(key), Box::new(value))
	}

	/// Nested record type called `name`
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::DeclaredType;
	///
	/// let address = DeclaredType::record("Address");
	/// assert!(address.is_record());
	/// ```
	pub fn record(name: impl Into<String>) -> Self {
		Self::Record(name.into())
	}

	/// Nullable `inner`
	pub fn optional(inner: DeclaredType) -> Self {
		Self::Optional(Box::new(inner))
	}

	/// Strip every `Optional` wrapper
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::DeclaredType;
	///
	/// let ty = DeclaredType::optional(DeclaredType::optional(DeclaredType::Integer));
	/// assert_eq!(ty.unwrap_optional(), &DeclaredType::Integer);
	/// ```
	pub fn unwrap_optional(&self) -> &DeclaredType {
		let mut current = self;
		while let DeclaredType::Optional(inner) = current {
			current = inner;
		}
		current
	}

	/// Whether the type accepts null
	pub fn is_optional(&self) -> bool {
		matches!(self, DeclaredType::Optional(_))
	}

	/// Whether the type, once optional wrappers are stripped, is a record
	pub fn is_record(&self) -> bool {
		matches!(self.unwrap_optional(), DeclaredType::Record(_))
	}

	/// Whether the type, once optional wrappers are stripped, is a mapping
	pub fn is_map(&self) -> bool {
		matches!(self.unwrap_optional(), DeclaredType::Map(..))
	}

	/// Record type name, if this is a record type
	pub fn record_name(&self) -> Option<&str> {
		match self.unwrap_optional() {
			DeclaredType::Record(name) => Some(name),
			_ => None,
		}
	}
}

impl fmt::Display for DeclaredType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			DeclaredType::Text => f.write_str("text"),
			DeclaredType::Integer => f.write_str("integer"),
			DeclaredType::Float => f.write_str("float"),
			DeclaredType::Boolean => f.write_str("boolean"),
			DeclaredType::Date => f.write_str("date"),
			DeclaredType::DateTime => f.write_str("datetime"),
			DeclaredType::Enum(e) => write!(f, "enum {}", e.name),
			DeclaredType::Literal(values) => {
				f.write_str("literal[")?;
				for (i, v) in values.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", v)?;
				}
				f.write_str("]")
			}
			DeclaredType::List(inner) => write!(f, "list[{}]", inner),
			DeclaredType::Map(k, v) => write!(f, "map[{}, {}]", k, v),
			DeclaredType::Record(name) => f.write_str(name),
			DeclaredType::Optional(inner) => write!(f, "optional[{}]", inner),
			DeclaredType::Bytes => f.write_str("bytes"),
			DeclaredType::Uuid => f.write_str("uuid"),
			DeclaredType::Callable => f.write_str("callable"),
			DeclaredType::Any => f.write_str("any"),
			DeclaredType::Opaque(name) => f.write_str(name),
		}
	}
}

/// Enumeration declared by the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumType {
	pub name: String,
	pub variants: Vec<EnumVariant>,
}

impl EnumType {
	/// Create an enumeration from `(variant name, value)` pairs
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::EnumType;
	///
	/// let role = EnumType::new("UserRole", [("ADMIN", "admin"), ("USER", "user")]);
	/// assert_eq!(role.variants.len(), 2);
	/// assert_eq!(role.variants[0].value, "admin");
	/// ```
	pub fn new<I, N, V>(name: impl Into<String>, variants: I) -> Self
	where
		I: IntoIterator<Item = (N, V)>,
		N: Into<String>,
		V: Into<String>,
	{
		Self {
			name: name.into(),
			variants: variants
				.into_iter()
				.map(|(n, v)| EnumVariant {
					name: n.into(),
					value: v.into(),
				})
				.collect(),
		}
	}
}

impl From<EnumType> for DeclaredType {
	fn from(e: EnumType) -> Self {
		DeclaredType::Enum(e)
	}
}

/// One variant of an [`EnumType`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumVariant {
	pub name: String,
	pub value: String,
}

/// Literal constant allowed by a [`DeclaredType::Literal`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
	Bool(bool),
	Int(i64),
	Text(String),
}

impl fmt::Display for Literal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Literal::Bool(b) => write!(f, "{}", b),
			Literal::Int(i) => write!(f, "{}", i),
			Literal::Text(s) => f.write_str(s),
		}
	}
}

impl From<&str> for Literal {
	fn from(s: &str) -> Self {
		Literal::Text(s.to_string())
	}
}

impl From<String> for Literal {
	fn from(s: String) -> Self {
		Literal::Text(s)
	}
}

impl From<i64> for Literal {
	fn from(i: i64) -> Self {
		Literal::Int(i)
	}
}

impl From<bool> for Literal {
	fn from(b: bool) -> Self {
		Literal::Bool(b)
	}
}
