//! Field paths
//!
//! A path names a value inside the rendered model (`user.address.city`,
//! `items[0].name`, `prices[EUR]`). Form controls use it as their `id` and
//! `name`, and per-field live updates scope their requests with it.

use std::fmt;

/// One step of a [`FieldPath`]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
	/// Record field access: `.name`
	Field(String),
	/// List element access: `[0]`
	Index(usize),
	/// Mapping entry access: `[key]`
	Key(String),
}

/// Location of a value within the rendered model
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FieldPath {
	segments: Vec<PathSegment>,
}

impl FieldPath {
	/// The empty path of the root record
	pub fn root() -> Self {
		Self::default()
	}

	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}

	/// Path of field `name` below this one
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::path::FieldPath;
	///
	/// let path = FieldPath::root().field("items").index(2).field("name");
	/// assert_eq!(path.to_string(), "items[2].name");
	/// ```
	pub fn field(&self, name: &str) -> Self {
		self.with(PathSegment::Field(name.to_string()))
	}

	/// Path of list element `idx` below this one
	pub fn index(&self, idx: usize) -> Self {
		self.with(PathSegment::Index(idx))
	}

	/// Path of mapping entry `key` below this one
	pub fn key(&self, key: &str) -> Self {
		self.with(PathSegment::Key(key.to_string()))
	}

	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	fn with(&self, segment: PathSegment) -> Self {
		let mut segments = self.segments.clone();
		segments.push(segment);
		Self { segments }
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (i, segment) in self.segments.iter().enumerate() {
			match segment {
				PathSegment::Field(name) if i == 0 => f.write_str(name)?,
				PathSegment::Field(name) => write!(f, ".{}", name)?,
				PathSegment::Index(idx) => write!(f, "[{}]", idx)?,
				PathSegment::Key(key) => write!(f, "[{}]", key)?,
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_root_path_is_empty() {
		assert!(FieldPath::root().is_root());
		assert_eq!(FieldPath::root().to_string(), "");
	}

	#[rstest]
	fn test_mixed_segments() {
		// Arrange
		let path = FieldPath::root().field("prices").key("EUR").field("amount");

		// Act & Assert
		assert_eq!(path.to_string(), "prices[EUR].amount");
		assert_eq!(path.segments().len(), 3);
		assert!(!path.is_root());
	}

	#[rstest]
	fn test_extending_does_not_modify_parent() {
		let parent = FieldPath::root().field("tags");
		let child = parent.index(0);
		assert_eq!(parent.to_string(), "tags");
		assert_eq!(child.to_string(), "tags[0]");
	}
}
