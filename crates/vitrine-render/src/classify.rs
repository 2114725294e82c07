//! Field classification
//!
//! Every declared type maps to exactly one [`FieldKind`], which decides the
//! markup shape of the field. Classification is total: types the renderer has
//! no dedicated shape for fall back to [`FieldKind::Unsupported`].

use std::fmt;
use vitrine_schema::DeclaredType;

/// Markup shape selected for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
	Text,
	Number,
	Boolean,
	DateTime,
	Enum,
	LiteralChoice,
	ListOfScalar,
	ListOfRecord,
	MappingStructured,
	MappingUnstructured,
	NestedRecord,
	Unsupported,
}

impl FieldKind {
	/// Kinds rendered by the element builder as a single element
	pub fn is_scalar(&self) -> bool {
		matches!(
			self,
			FieldKind::Text
				| FieldKind::Number
				| FieldKind::Boolean
				| FieldKind::DateTime
				| FieldKind::Enum
				| FieldKind::LiteralChoice
				| FieldKind::Unsupported
		)
	}

	/// Kinds that need sub-structure traversal
	pub fn is_composite(&self) -> bool {
		!self.is_scalar()
	}

	/// Kinds that become form controls in editable mode
	pub fn is_editable(&self) -> bool {
		self.is_scalar() && *self != FieldKind::Unsupported
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			FieldKind::Text => "scalar-text",
			FieldKind::Number => "scalar-number",
			FieldKind::Boolean => "scalar-boolean",
			FieldKind::DateTime => "scalar-datetime",
			FieldKind::Enum => "enum",
			FieldKind::LiteralChoice => "literal-choice",
			FieldKind::ListOfScalar => "list-of-scalar",
			FieldKind::ListOfRecord => "list-of-record",
			FieldKind::MappingStructured => "mapping-structured",
			FieldKind::MappingUnstructured => "mapping-unstructured",
			FieldKind::NestedRecord => "nested-record",
			FieldKind::Unsupported => "unsupported",
		}
	}
}

impl fmt::Display for FieldKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Classify a declared type
///
/// Optional wrappers are transparent. Rules apply in priority order: enum,
/// literal set, list of records, other lists, mappings (structured when the
/// value type is a record or a mapping), records, scalars, and finally the
/// unsupported fallback.
///
/// # Examples
///
/// ```
/// use vitrine_render::classify::{classify, FieldKind};
/// use vitrine_schema::DeclaredType;
///
/// assert_eq!(classify(&DeclaredType::Integer), FieldKind::Number);
/// assert_eq!(
///     classify(&DeclaredType::list(DeclaredType::record("Address"))),
///     FieldKind::ListOfRecord
/// );
/// assert_eq!(classify(&DeclaredType::Uuid), FieldKind::Unsupported);
/// ```
pub fn classify(ty: &DeclaredType) -> FieldKind {
	match ty.unwrap_optional() {
		DeclaredType::Enum(_) => FieldKind::Enum,
		DeclaredType::Literal(_) => FieldKind::LiteralChoice,
		DeclaredType::List(element) if element.is_record() => FieldKind::ListOfRecord,
		DeclaredType::List(_) => FieldKind::ListOfScalar,
		DeclaredType::Map(_, value) if value.is_record() || value.is_map() => {
			FieldKind::MappingStructured
		}
		DeclaredType::Map(..) => FieldKind::MappingUnstructured,
		DeclaredType::Record(_) => FieldKind::NestedRecord,
		DeclaredType::Text => FieldKind::Text,
		DeclaredType::Integer | DeclaredType::Float => FieldKind::Number,
		DeclaredType::Boolean => FieldKind::Boolean,
		DeclaredType::Date | DeclaredType::DateTime => FieldKind::DateTime,
		DeclaredType::Bytes
		| DeclaredType::Uuid
		| DeclaredType::Callable
		| DeclaredType::Any
		| DeclaredType::Opaque(_)
		| DeclaredType::Optional(_) => FieldKind::Unsupported,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use vitrine_schema::EnumType;

	#[rstest]
	#[case(DeclaredType::Text, FieldKind::Text)]
	#[case(DeclaredType::Integer, FieldKind::Number)]
	#[case(DeclaredType::Float, FieldKind::Number)]
	#[case(DeclaredType::Boolean, FieldKind::Boolean)]
	#[case(DeclaredType::Date, FieldKind::DateTime)]
	#[case(DeclaredType::DateTime, FieldKind::DateTime)]
	#[case(DeclaredType::Bytes, FieldKind::Unsupported)]
	#[case(DeclaredType::Callable, FieldKind::Unsupported)]
	#[case(DeclaredType::Any, FieldKind::Unsupported)]
	#[case(DeclaredType::Opaque("Decimal".into()), FieldKind::Unsupported)]
	fn test_classify_leaf_types(#[case] ty: DeclaredType, #[case] expected: FieldKind) {
		assert_eq!(classify(&ty), expected);
	}

	#[rstest]
	fn test_enum_wins_over_everything() {
		// Arrange
		let ty = DeclaredType::optional(EnumType::new("Role", [("A", "a")]).into());

		// Act & Assert
		assert_eq!(classify(&ty), FieldKind::Enum);
	}

	#[rstest]
	#[case(DeclaredType::record("Address"), FieldKind::MappingStructured)]
	#[case(DeclaredType::map(DeclaredType::Text, DeclaredType::Integer), FieldKind::MappingStructured)]
	#[case(DeclaredType::optional(DeclaredType::record("Address")), FieldKind::MappingStructured)]
	#[case(DeclaredType::Text, FieldKind::MappingUnstructured)]
	#[case(DeclaredType::list(DeclaredType::record("Address")), FieldKind::MappingUnstructured)]
	fn test_classify_mapping_by_value_type(#[case] value_ty: DeclaredType, #[case] expected: FieldKind) {
		let ty = DeclaredType::map(DeclaredType::Text, value_ty);
		assert_eq!(classify(&ty), expected);
	}

	#[rstest]
	#[case(DeclaredType::Text, FieldKind::ListOfScalar)]
	#[case(DeclaredType::Uuid, FieldKind::ListOfScalar)]
	#[case(DeclaredType::list(DeclaredType::record("Inner")), FieldKind::ListOfScalar)]
	#[case(DeclaredType::record("Inner"), FieldKind::ListOfRecord)]
	#[case(DeclaredType::optional(DeclaredType::record("Inner")), FieldKind::ListOfRecord)]
	fn test_classify_list_by_element_type(#[case] element: DeclaredType, #[case] expected: FieldKind) {
		assert_eq!(classify(&DeclaredType::list(element)), expected);
	}

	#[rstest]
	fn test_only_unsupported_and_composites_are_not_editable() {
		assert!(FieldKind::Text.is_editable());
		assert!(FieldKind::LiteralChoice.is_editable());
		assert!(!FieldKind::Unsupported.is_editable());
		assert!(!FieldKind::NestedRecord.is_editable());
		assert!(FieldKind::ListOfRecord.is_composite());
	}
}
