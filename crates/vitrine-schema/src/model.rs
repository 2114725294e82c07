//! Models and their record projection

use crate::field::FieldDescriptor;
use crate::types::DeclaredType;
use crate::value::Value;

/// A structured data model that can describe its own fields
///
/// Implementations list their fields in declaration order; the renderer
/// preserves that order.
///
/// # Examples
///
/// ```
/// use vitrine_schema::{DeclaredType, FieldConstraints, FieldDescriptor, Model};
///
/// struct User {
///     name: String,
///     age: i64,
/// }
///
/// impl Model for User {
///     fn model_name(&self) -> &str {
///         "User"
///     }
///
///     fn fields(&self) -> Vec<FieldDescriptor> {
///         vec![
///             FieldDescriptor::new("name", DeclaredType::Text).with_value(self.name.clone()),
///             FieldDescriptor::new("age", DeclaredType::Integer)
///                 .with_constraints(FieldConstraints::new().ge(0))
///                 .with_value(self.age),
///         ]
///     }
/// }
///
/// let record = User { name: "John Doe".into(), age: 30 }.to_record();
/// assert_eq!(record.type_name(), "User");
/// assert_eq!(record.fields().len(), 2);
/// ```
pub trait Model {
	/// Type name shown as the title of the rendered model
	fn model_name(&self) -> &str;

	/// Field descriptors in declaration order
	fn fields(&self) -> Vec<FieldDescriptor>;

	/// Snapshot the model as a [`Record`]
	fn to_record(&self) -> Record {
		Record::new(self.model_name(), self.fields())
	}
}

/// Read-only projection of a model instance
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
	type_name: String,
	fields: Vec<FieldDescriptor>,
}

impl Record {
	pub fn new(type_name: impl Into<String>, fields: Vec<FieldDescriptor>) -> Self {
		Self {
			type_name: type_name.into(),
			fields,
		}
	}

	/// Start an empty record and add fields with [`Record::field`]
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::{DeclaredType, Record};
	///
	/// let address = Record::builder("Address")
	///     .field("city", DeclaredType::Text, "Anytown")
	///     .field("zip_code", DeclaredType::Text, "12345");
	/// assert_eq!(address.fields()[1].name, "zip_code");
	/// ```
	pub fn builder(type_name: impl Into<String>) -> Self {
		Self::new(type_name, Vec::new())
	}

	/// Append a field holding `value`
	pub fn field(mut self, name: impl Into<String>, ty: DeclaredType, value: impl Into<Value>) -> Self {
		self.fields.push(FieldDescriptor::new(name, ty).with_value(value));
		self
	}

	/// Append a prepared descriptor
	pub fn descriptor(mut self, field: FieldDescriptor) -> Self {
		self.fields.push(field);
		self
	}

	pub fn type_name(&self) -> &str {
		&self.type_name
	}

	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// Look up a field by name
	pub fn get(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|f| f.name == name)
	}
}

impl Model for Record {
	fn model_name(&self) -> &str {
		&self.type_name
	}

	fn fields(&self) -> Vec<FieldDescriptor> {
		self.fields.clone()
	}

	fn to_record(&self) -> Record {
		self.clone()
	}
}

impl<M: Model + ?Sized> Model for &M {
	fn model_name(&self) -> &str {
		(**self).model_name()
	}

	fn fields(&self) -> Vec<FieldDescriptor> {
		(**self).fields()
	}

	fn to_record(&self) -> Record {
		(**self).to_record()
	}
}
