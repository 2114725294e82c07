//! Element building
//!
//! Turns one scalar field into a fragment: escaped text in read-only mode, a
//! form control from [`crate::widgets`] in editable mode. Composite kinds are
//! the recursor's business; handed one anyway, the builder falls back to the
//! value's text.

use crate::classify::FieldKind;
use crate::constraints::{ConstraintRecord, NumericBound};
use crate::fragment::Fragment;
use crate::path::FieldPath;
use crate::widgets::{Attrs, CheckboxInput, RadioSelect, Select, TextInput, Widget};
use vitrine_schema::{DeclaredType, EnumType, Value};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATETIME_LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Offset applied to exclusive float bounds
const FLOAT_STEP: f64 = 0.01;

/// Float steps per unit, `1 / FLOAT_STEP`
const STEPS_PER_UNIT: f64 = 100.0;

/// Build the fragment for one scalar field
///
/// `ty` is the declared type of the field (optional wrappers allowed); it
/// carries the variants of enums and literal sets, and tells dates from
/// date-times and integers from floats. Controls use `path` as `id` and
/// `name`.
///
/// # Examples
///
/// ```
/// use vitrine_render::classify::FieldKind;
/// use vitrine_render::constraints::ConstraintRecord;
/// use vitrine_render::element::build;
/// use vitrine_render::path::FieldPath;
/// use vitrine_schema::{DeclaredType, Value};
///
/// let path = FieldPath::root().field("name");
/// let value = Value::from("John <Doe>");
/// let none = ConstraintRecord::none();
///
/// let text = build(FieldKind::Text, &DeclaredType::Text, &value, &none, false, &path);
/// assert_eq!(text.as_str(), "John &lt;Doe&gt;");
///
/// let input = build(FieldKind::Text, &DeclaredType::Text, &value, &none, true, &path);
/// assert_eq!(
///     input.as_str(),
///     r#"<input type="text" id="name" name="name" value="John &lt;Doe&gt;" />"#
/// );
/// ```
pub fn build(
	kind: FieldKind,
	ty: &DeclaredType,
	value: &Value,
	constraints: &ConstraintRecord,
	editable: bool,
	path: &FieldPath,
) -> Fragment {
	let ty = ty.unwrap_optional();
	if !editable {
		return Fragment::text(&display_text(kind, ty, value));
	}

	let name = path.to_string();
	match kind {
		FieldKind::Text => {
			let attrs = Attrs::new()
				.attr_opt("minlength", constraints.min_length)
				.attr_opt("maxlength", constraints.max_length)
				.attr_opt("pattern", constraints.pattern.as_deref())
				.flag_if("required", constraints.required);
			input(&TextInput::new(), &name, &input_value(value), &attrs)
		}
		FieldKind::Number => {
			let integer = !matches!(ty, DeclaredType::Float);
			let attrs = Attrs::new()
				.attr_opt("step", (!integer).then_some(FLOAT_STEP))
				.attr_opt("min", constraints.lower.map(|b| lower_attr(b, integer)))
				.attr_opt("max", constraints.upper.map(|b| upper_attr(b, integer)))
				.flag_if("required", constraints.required);
			input(&TextInput::number(), &name, &input_value(value), &attrs)
		}
		FieldKind::Boolean => {
			let checked = if value.is_truthy() { "true" } else { "false" };
			Fragment::raw(CheckboxInput::new().render(&name, Some(checked), &Attrs::new()))
		}
		FieldKind::DateTime => {
			let attrs = Attrs::new().flag_if("required", constraints.required);
			if matches!(ty, DeclaredType::Date) {
				input(&TextInput::date(), &name, &date_value(value), &attrs)
			} else {
				input(&TextInput::datetime_local(), &name, &datetime_value(value), &attrs)
			}
		}
		FieldKind::Enum => {
			let attrs = Attrs::new().flag_if("required", constraints.required);
			let choices: Vec<(String, String)> = match ty {
				DeclaredType::Enum(e) => e
					.variants
					.iter()
					.map(|v| (v.value.clone(), v.value.clone()))
					.collect(),
				_ => Vec::new(),
			};
			let current = enum_value(ty, value);
			Fragment::raw(RadioSelect::new().render_with_choices(
				&name,
				current.as_deref(),
				&attrs,
				&choices,
			))
		}
		FieldKind::LiteralChoice => {
			let attrs = Attrs::new().flag_if("required", constraints.required);
			let choices: Vec<(String, String)> = match ty {
				DeclaredType::Literal(literals) => literals
					.iter()
					.map(|l| (l.to_string(), l.to_string()))
					.collect(),
				_ => Vec::new(),
			};
			let current = value.to_string();
			Fragment::raw(Select::new().render_with_choices(&name, Some(&current), &attrs, &choices))
		}
		FieldKind::Unsupported => {
			Fragment::text(&placeholder(value)).wrap("span", r#"class="field-readonly""#)
		}
		_ => Fragment::text(&value.to_string()),
	}
}

/// Text shown for an unsupported value
///
/// # Examples
///
/// ```
/// use vitrine_render::element::placeholder;
/// use vitrine_schema::Value;
///
/// assert_eq!(placeholder(&Value::Bytes(vec![0, 159, 146])), "[binary data]");
/// assert_eq!(placeholder(&Value::Function("callback".into())), "[function]");
/// assert_eq!(placeholder(&Value::Int(7)), "7");
/// ```
pub fn placeholder(value: &Value) -> String {
	match value {
		Value::Bytes(_) => "[binary data]".to_string(),
		Value::Function(_) => "[function]".to_string(),
		other => other.to_string(),
	}
}

fn display_text(kind: FieldKind, ty: &DeclaredType, value: &Value) -> String {
	match kind {
		FieldKind::Unsupported => placeholder(value),
		FieldKind::Enum if !value.is_null() => {
			enum_value(ty, value).unwrap_or_else(|| value.to_string())
		}
		_ => value.to_string(),
	}
}

fn input(widget: &TextInput, name: &str, value: &str, attrs: &Attrs) -> Fragment {
	Fragment::raw(widget.render(name, Some(value), attrs))
}

fn input_value(value: &Value) -> String {
	match value {
		Value::Null => String::new(),
		other => other.to_string(),
	}
}

fn date_value(value: &Value) -> String {
	match value {
		Value::Date(d) => d.format(DATE_FORMAT).to_string(),
		Value::DateTime(dt) => dt.format(DATE_FORMAT).to_string(),
		other => input_value(other),
	}
}

fn datetime_value(value: &Value) -> String {
	match value {
		Value::DateTime(dt) => dt.format(DATETIME_LOCAL_FORMAT).to_string(),
		Value::Date(d) => format!("{}T00:00", d.format(DATE_FORMAT)),
		other => input_value(other),
	}
}

/// Variant value selected by `value`, matching either variant values or names
fn enum_value(ty: &DeclaredType, value: &Value) -> Option<String> {
	let Value::Text(text) = value else {
		return None;
	};
	match ty {
		DeclaredType::Enum(EnumType { variants, .. }) => variants
			.iter()
			.find(|v| v.value == *text)
			.or_else(|| variants.iter().find(|v| v.name == *text))
			.map(|v| v.value.clone()),
		_ => Some(text.clone()),
	}
}

fn lower_attr(bound: NumericBound, integer: bool) -> f64 {
	match (integer, bound.exclusive) {
		(true, false) => bound.value.ceil(),
		(true, true) => bound.value.floor() + 1.0,
		(false, false) => bound.value,
		(false, true) => to_step(bound.value + FLOAT_STEP),
	}
}

fn upper_attr(bound: NumericBound, integer: bool) -> f64 {
	match (integer, bound.exclusive) {
		(true, false) => bound.value.floor(),
		(true, true) => bound.value.ceil() - 1.0,
		(false, false) => bound.value,
		(false, true) => to_step(bound.value - FLOAT_STEP),
	}
}

/// Snap to the float step grid, dropping binary rounding noise
fn to_step(value: f64) -> f64 {
	(value * STEPS_PER_UNIT).round() / STEPS_PER_UNIT
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;
	use rstest::{fixture, rstest};
	use vitrine_schema::Literal;

	#[fixture]
	fn path() -> FieldPath {
		FieldPath::root().field("f")
	}

	fn role() -> DeclaredType {
		EnumType::new("UserRole", [("ADMIN", "admin"), ("USER", "user")]).into()
	}

	#[rstest]
	#[case(Value::Int(30), "30")]
	#[case(Value::Float(3.5), "3.5")]
	#[case(Value::Bool(false), "false")]
	#[case(Value::Null, "None")]
	fn test_read_only_scalars(path: FieldPath, #[case] value: Value, #[case] expected: &str) {
		let fragment = build(FieldKind::Number, &DeclaredType::Integer, &value, &ConstraintRecord::none(), false, &path);
		assert_eq!(fragment.as_str(), expected);
	}

	#[rstest]
	fn test_text_input_carries_length_bounds(path: FieldPath) {
		// Arrange
		let constraints = ConstraintRecord {
			min_length: Some(3),
			max_length: Some(50),
			required: true,
			..ConstraintRecord::none()
		};

		// Act
		let fragment = build(FieldKind::Text, &DeclaredType::Text, &Value::from("abc"), &constraints, true, &path);

		// Assert
		assert_eq!(
			fragment.as_str(),
			r#"<input type="text" id="f" name="f" value="abc" minlength="3" maxlength="50" required />"#
		);
	}

	#[rstest]
	#[case(DeclaredType::Integer, NumericBound::inclusive(0.0), r#"min="0""#)]
	#[case(DeclaredType::Integer, NumericBound::exclusive(0.0), r#"min="1""#)]
	#[case(DeclaredType::Integer, NumericBound::inclusive(0.5), r#"min="1""#)]
	#[case(DeclaredType::Float, NumericBound::inclusive(0.0), r#"min="0""#)]
	#[case(DeclaredType::Float, NumericBound::exclusive(0.0), r#"min="0.01""#)]
	fn test_number_lower_bound(
		path: FieldPath,
		#[case] ty: DeclaredType,
		#[case] bound: NumericBound,
		#[case] expected: &str,
	) {
		// Arrange
		let constraints = ConstraintRecord {
			lower: Some(bound),
			..ConstraintRecord::none()
		};

		// Act
		let fragment = build(FieldKind::Number, &ty, &Value::Int(5), &constraints, true, &path);

		// Assert
		assert!(fragment.as_str().contains(expected), "{}", fragment);
	}

	#[rstest]
	fn test_exclusive_upper_bounds(path: FieldPath) {
		// Arrange
		let constraints = ConstraintRecord {
			upper: Some(NumericBound::exclusive(100.0)),
			..ConstraintRecord::none()
		};

		// Act
		let int = build(FieldKind::Number, &DeclaredType::Integer, &Value::Int(1), &constraints, true, &path);
		let float = build(FieldKind::Number, &DeclaredType::Float, &Value::Float(1.0), &constraints, true, &path);

		// Assert
		assert!(int.as_str().contains(r#"max="99""#));
		assert!(float.as_str().contains(r#"max="99.99""#));
	}

	#[rstest]
	#[case(NumericBound::exclusive(1.1), r#"max="1.09""#)]
	#[case(NumericBound::exclusive(0.3), r#"max="0.29""#)]
	#[case(NumericBound::exclusive(5.0), r#"max="4.99""#)]
	#[case(NumericBound::inclusive(1.1), r#"max="1.1""#)]
	fn test_float_upper_bound_has_no_rounding_noise(
		path: FieldPath,
		#[case] bound: NumericBound,
		#[case] expected: &str,
	) {
		// Arrange
		let constraints = ConstraintRecord {
			upper: Some(bound),
			..ConstraintRecord::none()
		};

		// Act
		let fragment = build(FieldKind::Number, &DeclaredType::Float, &Value::Float(0.5), &constraints, true, &path);

		// Assert
		assert!(fragment.as_str().contains(expected), "{}", fragment);
	}

	#[rstest]
	fn test_step_only_for_floats(path: FieldPath) {
		let none = ConstraintRecord::none();
		let int = build(FieldKind::Number, &DeclaredType::Integer, &Value::Int(1), &none, true, &path);
		let float = build(FieldKind::Number, &DeclaredType::Float, &Value::Float(1.5), &none, true, &path);
		assert!(!int.as_str().contains("step="));
		assert!(float.as_str().contains(r#"step="0.01""#));
		assert!(float.as_str().contains(r#"value="1.5""#));
	}

	#[rstest]
	#[case(Value::Bool(true), true)]
	#[case(Value::Bool(false), false)]
	#[case(Value::Null, false)]
	fn test_checkbox_state(path: FieldPath, #[case] value: Value, #[case] checked: bool) {
		let fragment = build(FieldKind::Boolean, &DeclaredType::Boolean, &value, &ConstraintRecord::none(), true, &path);
		assert_eq!(fragment.as_str().contains(" checked"), checked);
	}

	#[rstest]
	fn test_date_and_datetime_inputs(path: FieldPath) {
		// Arrange
		let day = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
		let moment = day.and_hms_opt(10, 30, 0).unwrap();
		let none = ConstraintRecord::none();

		// Act
		let date = build(FieldKind::DateTime, &DeclaredType::Date, &Value::Date(day), &none, true, &path);
		let datetime = build(FieldKind::DateTime, &DeclaredType::DateTime, &Value::DateTime(moment), &none, true, &path);
		let read_only = build(FieldKind::DateTime, &DeclaredType::DateTime, &Value::DateTime(moment), &none, false, &path);

		// Assert
		assert_eq!(date.as_str(), r#"<input type="date" id="f" name="f" value="2024-01-15" />"#);
		assert_eq!(
			datetime.as_str(),
			r#"<input type="datetime-local" id="f" name="f" value="2024-01-15T10:30" />"#
		);
		assert_eq!(read_only.as_str(), "2024-01-15T10:30:00");
	}

	#[rstest]
	#[case(Value::from("user"))]
	#[case(Value::from("USER"))]
	fn test_enum_radio_group_checks_current_variant(path: FieldPath, #[case] value: Value) {
		// Act
		let fragment = build(FieldKind::Enum, &role(), &value, &ConstraintRecord::none(), true, &path);

		// Assert
		assert!(fragment.as_str().contains(r#"value="user" checked"#));
		assert_eq!(fragment.as_str().matches(r#"type="radio""#).count(), 2);
	}

	#[rstest]
	fn test_enum_read_only_shows_variant_value(path: FieldPath) {
		let fragment = build(FieldKind::Enum, &role(), &Value::from("ADMIN"), &ConstraintRecord::none(), false, &path);
		assert_eq!(fragment.as_str(), "admin");
	}

	#[rstest]
	fn test_literal_select(path: FieldPath) {
		// Arrange
		let ty = DeclaredType::Literal(vec![Literal::from("option1"), Literal::from("option2")]);

		// Act
		let fragment = build(FieldKind::LiteralChoice, &ty, &Value::from("option2"), &ConstraintRecord::none(), true, &path);

		// Assert
		assert!(fragment.as_str().starts_with(r#"<select id="f" name="f">"#));
		assert!(fragment.as_str().contains(r#"<option value="option2" selected>option2</option>"#));
	}

	#[rstest]
	#[case(false)]
	#[case(true)]
	fn test_unsupported_is_never_an_input(path: FieldPath, #[case] editable: bool) {
		// Act
		let fragment = build(
			FieldKind::Unsupported,
			&DeclaredType::Bytes,
			&Value::Bytes(vec![1, 2, 3]),
			&ConstraintRecord::none(),
			editable,
			&path,
		);

		// Assert
		assert!(fragment.as_str().contains("[binary data]"));
		assert!(!fragment.as_str().contains("<input"));
	}

	#[rstest]
	fn test_null_edits_as_empty_value(path: FieldPath) {
		let ty = DeclaredType::optional(DeclaredType::Text);
		let fragment = build(FieldKind::Text, &ty, &Value::Null, &ConstraintRecord::none(), true, &path);
		assert!(fragment.as_str().contains(r#"value="""#));
	}
}
