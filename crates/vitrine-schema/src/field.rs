//! Field descriptors and their validation metadata

use crate::types::DeclaredType;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Validation metadata attached to a field by the schema
///
/// This is the raw, kind-agnostic form. The renderer keeps only the entries
/// that make sense for the field's shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldConstraints {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_length: Option<usize>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_length: Option<usize>,
	/// Exclusive lower bound
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub gt: Option<f64>,
	/// Inclusive lower bound
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ge: Option<f64>,
	/// Exclusive upper bound
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub lt: Option<f64>,
	/// Inclusive upper bound
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub le: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub pattern: Option<String>,
}

impl FieldConstraints {
	/// Create an empty constraint set
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::FieldConstraints;
	///
	/// let constraints = FieldConstraints::new().min_length(3).max_length(50);
	/// assert_eq!(constraints.min_length, Some(3));
	/// assert_eq!(constraints.max_length, Some(50));
	/// assert!(constraints.pattern.is_none());
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	pub fn min_length(mut self, n: usize) -> Self {
		self.min_length = Some(n);
		self
	}

	pub fn max_length(mut self, n: usize) -> Self {
		self.max_length = Some(n);
		self
	}

	pub fn gt(mut self, bound: impl Into<f64>) -> Self {
		self.gt = Some(bound.into());
		self
	}

	pub fn ge(mut self, bound: impl Into<f64>) -> Self {
		self.ge = Some(bound.into());
		self
	}

	pub fn lt(mut self, bound: impl Into<f64>) -> Self {
		self.lt = Some(bound.into());
		self
	}

	pub fn le(mut self, bound: impl Into<f64>) -> Self {
		self.le = Some(bound.into());
		self
	}

	pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
		self.pattern = Some(pattern.into());
		self
	}

	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

type FactoryFn = dyn Fn() -> Value + Send + Sync;

/// Producer of a field's default value
#[derive(Clone)]
pub struct DefaultFactory(Arc<FactoryFn>);

impl DefaultFactory {
	pub fn new<F>(f: F) -> Self
	where
		F: Fn() -> Value + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Run the factory
	pub fn produce(&self) -> Value {
		(self.0)()
	}
}

impl fmt::Debug for DefaultFactory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("DefaultFactory(..)")
	}
}

impl PartialEq for DefaultFactory {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.0, &other.0)
	}
}

/// Default declared for a field
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
	Value(Value),
	Factory(DefaultFactory),
}

impl DefaultValue {
	/// Concrete default, running the factory if there is one
	pub fn resolve(&self) -> Cow<'_, Value> {
		match self {
			DefaultValue::Value(v) => Cow::Borrowed(v),
			DefaultValue::Factory(factory) => Cow::Owned(factory.produce()),
		}
	}
}

/// One named field of a record, with its type, constraints and value
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
	pub name: String,
	pub ty: DeclaredType,
	pub constraints: FieldConstraints,
	pub value: Option<Value>,
	pub default: Option<DefaultValue>,
}

impl FieldDescriptor {
	/// Create a field with no value, default or constraints
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::{DeclaredType, FieldDescriptor, Value};
	///
	/// let field = FieldDescriptor::new("age", DeclaredType::Integer).with_value(30i64);
	/// assert_eq!(field.name, "age");
	/// assert_eq!(field.resolved_value().into_owned(), Value::Int(30));
	/// ```
	pub fn new(name: impl Into<String>, ty: DeclaredType) -> Self {
		Self {
			name: name.into(),
			ty,
			constraints: FieldConstraints::default(),
			value: None,
			default: None,
		}
	}

	pub fn with_value(mut self, value: impl Into<Value>) -> Self {
		self.value = Some(value.into());
		self
	}

	pub fn with_constraints(mut self, constraints: FieldConstraints) -> Self {
		self.constraints = constraints;
		self
	}

	pub fn with_default(mut self, value: impl Into<Value>) -> Self {
		self.default = Some(DefaultValue::Value(value.into()));
		self
	}

	/// Set a default produced on demand
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::{DeclaredType, FieldDescriptor, Value};
	///
	/// let field = FieldDescriptor::new("tags", DeclaredType::list(DeclaredType::Text))
	///     .with_default_factory(|| Value::List(vec![]));
	/// assert_eq!(field.resolved_value().into_owned(), Value::List(vec![]));
	/// assert!(!field.is_required());
	/// ```
	pub fn with_default_factory<F>(mut self, f: F) -> Self
	where
		F: Fn() -> Value + Send + Sync + 'static,
	{
		self.default = Some(DefaultValue::Factory(DefaultFactory::new(f)));
		self
	}

	/// A field is required when it has no default and does not accept null
	pub fn is_required(&self) -> bool {
		self.default.is_none() && !self.ty.is_optional()
	}

	/// The value to display: the current value, else the default, else null
	pub fn resolved_value(&self) -> Cow<'_, Value> {
		match (&self.value, &self.default) {
			(Some(v), _) => Cow::Borrowed(v),
			(None, Some(default)) => default.resolve(),
			(None, None) => Cow::Owned(Value::Null),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[rstest]
	fn test_current_value_wins_over_default() {
		// Arrange
		let field = FieldDescriptor::new("country", DeclaredType::Text)
			.with_default("USA")
			.with_value("Canada");

		// Act
		let value = field.resolved_value();

		// Assert
		assert_eq!(value.as_ref(), &Value::from("Canada"));
		assert!(matches!(value, Cow::Borrowed(_)));
	}

	#[rstest]
	fn test_factory_runs_only_without_value() {
		// Arrange
		static CALLS: AtomicUsize = AtomicUsize::new(0);
		let with_value = FieldDescriptor::new("items", DeclaredType::list(DeclaredType::Text))
			.with_default_factory(|| {
				CALLS.fetch_add(1, Ordering::SeqCst);
				Value::List(vec![])
			})
			.with_value(vec!["x"]);
		let without_value = FieldDescriptor {
			value: None,
			..with_value.clone()
		};

		// Act
		let _ = with_value.resolved_value();
		let resolved = without_value.resolved_value().into_owned();

		// Assert
		assert_eq!(CALLS.load(Ordering::SeqCst), 1);
		assert_eq!(resolved, Value::List(vec![]));
	}

	#[rstest]
	#[case(DeclaredType::Text, false, true)]
	#[case(DeclaredType::optional(DeclaredType::Text), false, false)]
	#[case(DeclaredType::Text, true, false)]
	fn test_is_required(#[case] ty: DeclaredType, #[case] has_default: bool, #[case] expected: bool) {
		let mut field = FieldDescriptor::new("f", ty);
		if has_default {
			field = field.with_default("x");
		}
		assert_eq!(field.is_required(), expected);
	}

	#[rstest]
	fn test_constraints_deserialize_from_metadata() {
		// Arrange
		let json = serde_json::json!({"min_length": 3, "max_length": 50, "pattern": "^[a-z]+$"});

		// Act
		let constraints: FieldConstraints = serde_json::from_value(json).unwrap();

		// Assert
		assert_eq!(
			constraints,
			FieldConstraints::new()
				.min_length(3)
				.max_length(50)
				.pattern("^[a-z]+$")
		);
		assert!(!constraints.is_empty());
		assert!(FieldConstraints::new().is_empty());
	}
}
