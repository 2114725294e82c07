//! Runtime field values

use crate::model::Record;
use chrono::{NaiveDate, NaiveDateTime};
use indexmap::IndexMap;
use std::fmt;
use uuid::Uuid;

/// Current value of a field
///
/// Values are owned trees: a nested record is held by value, so a value can
/// never refer back to one of its ancestors.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
	#[default]
	Null,
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
	Date(NaiveDate),
	DateTime(NaiveDateTime),
	Uuid(Uuid),
	Bytes(Vec<u8>),
	/// A callable, known only by name
	Function(String),
	List(Vec<Value>),
	/// Insertion-ordered mapping
	Map(IndexMap<String, Value>),
	Record(Record),
}

impl Value {
	pub fn is_null(&self) -> bool {
		matches!(self, Value::Null)
	}

	/// Borrow as a list, if this is one
	pub fn as_list(&self) -> Option<&[Value]> {
		match self {
			Value::List(items) => Some(items),
			_ => None,
		}
	}

	/// Borrow as a mapping, if this is one
	pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
		match self {
			Value::Map(entries) => Some(entries),
			_ => None,
		}
	}

	/// Borrow as a record, if this is one
	pub fn as_record(&self) -> Option<&Record> {
		match self {
			Value::Record(record) => Some(record),
			_ => None,
		}
	}

	/// Truthiness used for checkbox state
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_schema::Value;
	///
	/// assert!(Value::Bool(true).is_truthy());
	/// assert!(!Value::Null.is_truthy());
	/// assert!(!Value::Text(String::new()).is_truthy());
	/// assert!(Value::Int(3).is_truthy());
	/// ```
	pub fn is_truthy(&self) -> bool {
		match self {
			Value::Null => false,
			Value::Bool(b) => *b,
			Value::Int(i) => *i != 0,
			Value::Float(f) => *f != 0.0,
			Value::Text(s) => !s.is_empty(),
			Value::Bytes(b) => !b.is_empty(),
			Value::List(items) => !items.is_empty(),
			Value::Map(entries) => !entries.is_empty(),
			Value::Date(_)
			| Value::DateTime(_)
			| Value::Uuid(_)
			| Value::Function(_)
			| Value::Record(_) => true,
		}
	}
}

/// Plain-text form of a value
///
/// Floats keep a fractional part or exponent (`3.0`, `1.23e-10`) so they stay
/// distinguishable from integers. Dates and times use ISO 8601.
impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("None"),
			Value::Bool(b) => write!(f, "{}", b),
			Value::Int(i) => write!(f, "{}", i),
			Value::Float(x) => write!(f, "{:?}", x),
			Value::Text(s) => f.write_str(s),
			Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
			Value::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S")),
			Value::Uuid(u) => write!(f, "{}", u.hyphenated()),
			Value::Bytes(bytes) => write!(f, "{}", String::from_utf8_lossy(bytes)),
			Value::Function(name) => write!(f, "<function {}>", name),
			Value::List(items) => {
				f.write_str("[")?;
				for (i, item) in items.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}", item)?;
				}
				f.write_str("]")
			}
			Value::Map(entries) => {
				f.write_str("{")?;
				for (i, (k, v)) in entries.iter().enumerate() {
					if i > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{}: {}", k, v)?;
				}
				f.write_str("}")
			}
			Value::Record(record) => write!(f, "{}(..)", record.type_name()),
		}
	}
}

impl From<bool> for Value {
	fn from(b: bool) -> Self {
		Value::Bool(b)
	}
}

impl From<i64> for Value {
	fn from(i: i64) -> Self {
		Value::Int(i)
	}
}

impl From<i32> for Value {
	fn from(i: i32) -> Self {
		Value::Int(i64::from(i))
	}
}

impl From<u32> for Value {
	fn from(i: u32) -> Self {
		Value::Int(i64::from(i))
	}
}

impl From<f64> for Value {
	fn from(x: f64) -> Self {
		Value::Float(x)
	}
}

impl From<&str> for Value {
	fn from(s: &str) -> Self {
		Value::Text(s.to_string())
	}
}

impl From<String> for Value {
	fn from(s: String) -> Self {
		Value::Text(s)
	}
}

impl From<NaiveDate> for Value {
	fn from(d: NaiveDate) -> Self {
		Value::Date(d)
	}
}

impl From<NaiveDateTime> for Value {
	fn from(dt: NaiveDateTime) -> Self {
		Value::DateTime(dt)
	}
}

impl From<Uuid> for Value {
	fn from(u: Uuid) -> Self {
		Value::Uuid(u)
	}
}

impl From<Record> for Value {
	fn from(record: Record) -> Self {
		Value::Record(record)
	}
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(opt: Option<T>) -> Self {
		opt.map_or(Value::Null, Into::into)
	}
}

impl<T: Into<Value>> From<Vec<T>> for Value {
	fn from(items: Vec<T>) -> Self {
		Value::List(items.into_iter().map(Into::into).collect())
	}
}

impl<T: Into<Value>> FromIterator<(String, T)> for Value {
	fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
		Value::Map(iter.into_iter().map(|(k, v)| (k, v.into())).collect())
	}
}

/// JSON data maps onto the scalar, list and mapping variants; objects keep
/// their key order.
impl From<serde_json::Value> for Value {
	fn from(json: serde_json::Value) -> Self {
		match json {
			serde_json::Value::Null => Value::Null,
			serde_json::Value::Bool(b) => Value::Bool(b),
			serde_json::Value::Number(n) => match n.as_i64() {
				Some(i) => Value::Int(i),
				None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
			},
			serde_json::Value::String(s) => Value::Text(s),
			serde_json::Value::Array(items) => {
				Value::List(items.into_iter().map(Value::from).collect())
			}
			serde_json::Value::Object(entries) => Value::Map(
				entries
					.into_iter()
					.map(|(k, v)| (k, Value::from(v)))
					.collect(),
			),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(Value::Null, "None")]
	#[case(Value::Int(10_000_000_000), "10000000000")]
	#[case(Value::Float(3.0), "3.0")]
	#[case(Value::Float(1.23e-10), "1.23e-10")]
	#[case(Value::Bool(false), "false")]
	#[case(Value::from(vec!["a", "b"]), "[a, b]")]
	fn test_value_display(#[case] value: Value, #[case] expected: &str) {
		assert_eq!(value.to_string(), expected);
	}

	#[rstest]
	fn test_datetime_display_is_iso() {
		// Arrange
		let dt = NaiveDate::from_ymd_opt(2025, 3, 24)
			.unwrap()
			.and_hms_opt(12, 0, 0)
			.unwrap();

		// Act & Assert
		assert_eq!(Value::from(dt).to_string(), "2025-03-24T12:00:00");
		assert_eq!(Value::from(dt.date()).to_string(), "2025-03-24");
	}

	#[rstest]
	fn test_from_json_keeps_object_order() {
		// Arrange
		let json = json!({"zeta": 1, "alpha": [true, null], "mid": 2.5});

		// Act
		let value = Value::from(json);

		// Assert
		let map = value.as_map().unwrap();
		let keys: Vec<&str> = map.keys().map(String::as_str).collect();
		assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
		assert_eq!(map["alpha"], Value::List(vec![Value::Bool(true), Value::Null]));
		assert_eq!(map["mid"], Value::Float(2.5));
	}

	#[rstest]
	fn test_option_into_value() {
		assert_eq!(Value::from(None::<String>), Value::Null);
		assert_eq!(Value::from(Some(7i64)), Value::Int(7));
	}
}
