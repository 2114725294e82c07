//! Constraint extraction
//!
//! Normalizes the raw validation metadata of a field into a
//! [`ConstraintRecord`] holding only what the field's kind can express as HTML
//! attributes. Anything else is dropped.

use crate::classify::FieldKind;
use vitrine_schema::FieldDescriptor;

/// Numeric bound on a value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumericBound {
	pub value: f64,
	pub exclusive: bool,
}

impl NumericBound {
	pub fn inclusive(value: f64) -> Self {
		Self {
			value,
			exclusive: false,
		}
	}

	pub fn exclusive(value: f64) -> Self {
		Self {
			value,
			exclusive: true,
		}
	}
}

/// Constraints relevant to one field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConstraintRecord {
	pub min_length: Option<usize>,
	pub max_length: Option<usize>,
	pub lower: Option<NumericBound>,
	pub upper: Option<NumericBound>,
	pub pattern: Option<String>,
	pub required: bool,
}

impl ConstraintRecord {
	/// No constraints at all
	pub fn none() -> Self {
		Self::default()
	}

	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}

/// Extract the constraints of `field` that apply to `kind`
///
/// Text keeps length bounds and the pattern, numbers keep their bounds (an
/// inclusive bound takes precedence over an exclusive one on the same side).
/// `required` is kept for editable scalar kinds other than booleans.
///
/// # Examples
///
/// ```
/// use vitrine_render::classify::FieldKind;
/// use vitrine_render::constraints::{extract, NumericBound};
/// use vitrine_schema::{DeclaredType, FieldConstraints, FieldDescriptor};
///
/// let field = FieldDescriptor::new("age", DeclaredType::Integer)
///     .with_constraints(FieldConstraints::new().ge(0).pattern("[0-9]+"));
/// let record = extract(&field, FieldKind::Number);
/// assert_eq!(record.lower, Some(NumericBound::inclusive(0.0)));
/// assert_eq!(record.pattern, None);
/// ```
pub fn extract(field: &FieldDescriptor, kind: FieldKind) -> ConstraintRecord {
	let raw = &field.constraints;
	let mut record = ConstraintRecord {
		required: field.is_required() && kind.is_editable() && kind != FieldKind::Boolean,
		..ConstraintRecord::default()
	};

	match kind {
		FieldKind::Text => {
			record.min_length = raw.min_length;
			record.max_length = raw.max_length;
			record.pattern = raw.pattern.clone();
		}
		FieldKind::Number => {
			record.lower = raw
				.ge
				.map(NumericBound::inclusive)
				.or_else(|| raw.gt.map(NumericBound::exclusive));
			record.upper = raw
				.le
				.map(NumericBound::inclusive)
				.or_else(|| raw.lt.map(NumericBound::exclusive));
		}
		_ => {}
	}

	tracing::trace!(
		field = %field.name,
		kind = %kind,
		dropped = record.is_empty() && !raw.is_empty(),
		"Extracted constraints"
	);
	record
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vitrine_schema::{DeclaredType, FieldConstraints};

	fn all_constraints() -> FieldConstraints {
		FieldConstraints::new()
			.min_length(3)
			.max_length(50)
			.gt(1)
			.lt(10)
			.pattern("^[a-z]+$")
	}

	#[rstest]
	fn test_text_keeps_lengths_and_pattern() {
		// Arrange
		let field = FieldDescriptor::new("name", DeclaredType::Text).with_constraints(all_constraints());

		// Act
		let record = extract(&field, FieldKind::Text);

		// Assert
		assert_eq!(record.min_length, Some(3));
		assert_eq!(record.max_length, Some(50));
		assert_eq!(record.pattern.as_deref(), Some("^[a-z]+$"));
		assert_eq!(record.lower, None);
		assert_eq!(record.upper, None);
		assert!(record.required);
	}

	#[rstest]
	fn test_number_keeps_only_bounds() {
		// Arrange
		let field = FieldDescriptor::new("n", DeclaredType::Integer).with_constraints(all_constraints());

		// Act
		let record = extract(&field, FieldKind::Number);

		// Assert
		assert_eq!(record.lower, Some(NumericBound::exclusive(1.0)));
		assert_eq!(record.upper, Some(NumericBound::exclusive(10.0)));
		assert_eq!(record.min_length, None);
		assert_eq!(record.pattern, None);
	}

	#[rstest]
	fn test_inclusive_bound_takes_precedence() {
		// Arrange
		let field = FieldDescriptor::new("n", DeclaredType::Float)
			.with_constraints(FieldConstraints::new().gt(0).ge(1).lt(5).le(4));

		// Act
		let record = extract(&field, FieldKind::Number);

		// Assert
		assert_eq!(record.lower, Some(NumericBound::inclusive(1.0)));
		assert_eq!(record.upper, Some(NumericBound::inclusive(4.0)));
	}

	#[rstest]
	#[case(FieldKind::Boolean)]
	#[case(FieldKind::DateTime)]
	#[case(FieldKind::Enum)]
	#[case(FieldKind::ListOfScalar)]
	#[case(FieldKind::NestedRecord)]
	#[case(FieldKind::Unsupported)]
	fn test_other_kinds_drop_value_constraints(#[case] kind: FieldKind) {
		// Arrange
		let field = FieldDescriptor::new("f", DeclaredType::Any).with_constraints(all_constraints());

		// Act
		let record = extract(&field, kind);

		// Assert
		assert_eq!(
			ConstraintRecord {
				required: false,
				..record
			},
			ConstraintRecord::none()
		);
	}

	#[rstest]
	#[case(FieldKind::Text, true)]
	#[case(FieldKind::Boolean, false)]
	#[case(FieldKind::Unsupported, false)]
	#[case(FieldKind::NestedRecord, false)]
	fn test_required_flag_by_kind(#[case] kind: FieldKind, #[case] expected: bool) {
		let field = FieldDescriptor::new("f", DeclaredType::Text);
		assert_eq!(extract(&field, kind).required, expected);
	}

	#[rstest]
	fn test_field_with_default_is_not_required() {
		let field = FieldDescriptor::new("country", DeclaredType::Text).with_default("USA");
		assert!(!extract(&field, FieldKind::Text).required);
	}
}
