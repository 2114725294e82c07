//! Markup fragments
//!
//! A [`Fragment`] is a piece of generated HTML. Fragments are composed by
//! concatenation and nesting; the only structural operation is editing the
//! attributes of the root tag, which the attribute injector relies on.

use crate::html::escape;
use std::fmt;

/// A unit of generated markup
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fragment(String);

impl Fragment {
	/// Wrap markup that is already well formed and escaped
	pub fn raw(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	/// Escaped text content
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::Fragment;
	///
	/// assert_eq!(Fragment::text("a < b").as_str(), "a &lt; b");
	/// ```
	pub fn text(text: &str) -> Self {
		Self(escape(text))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	pub fn into_string(self) -> String {
		self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Append another fragment
	pub fn push(&mut self, other: Fragment) {
		self.0.push_str(&other.0);
	}

	/// Append raw markup
	pub fn push_str(&mut self, markup: &str) {
		self.0.push_str(markup);
	}

	/// `<tag attrs>self</tag>`
	pub fn wrap(self, tag: &str, attrs: &str) -> Self {
		let mut out = String::with_capacity(self.0.len() + tag.len() * 2 + attrs.len() + 5);
		out.push('<');
		out.push_str(tag);
		if !attrs.is_empty() {
			out.push(' ');
			out.push_str(attrs);
		}
		out.push('>');
		out.push_str(&self.0);
		out.push_str("</");
		out.push_str(tag);
		out.push('>');
		Self(out)
	}

	/// Whether the fragment starts with an element whose attributes can be edited
	pub fn has_root_tag(&self) -> bool {
		self.root_tag_end().is_some()
	}

	/// Add an attribute to the root tag
	///
	/// The value is escaped. Fragments without a root tag are returned
	/// unchanged.
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::Fragment;
	///
	/// let input = Fragment::raw(r#"<input type="text">"#).with_attr("hx-trigger", "change");
	/// assert_eq!(input.as_str(), r#"<input type="text" hx-trigger="change">"#);
	///
	/// let text = Fragment::text("plain").with_attr("hx-trigger", "change");
	/// assert_eq!(text.as_str(), "plain");
	/// ```
	pub fn with_attr(self, name: &str, value: &str) -> Self {
		match self.insertion_point() {
			Some(at) => {
				let mut out = self.0;
				out.insert_str(at, &format!(r#" {}="{}""#, name, escape(value)));
				Self(out)
			}
			None => self,
		}
	}

	/// Append a token to the root tag's `class` attribute, creating it if needed
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::Fragment;
	///
	/// let table = Fragment::raw(r#"<table class="model-fields"></table>"#).with_class("theme-dark");
	/// assert_eq!(table.as_str(), r#"<table class="model-fields theme-dark"></table>"#);
	///
	/// let bare = Fragment::raw("<ul><li>a</li></ul>").with_class("theme-dark");
	/// assert_eq!(bare.as_str(), r#"<ul class="theme-dark"><li>a</li></ul>"#);
	/// ```
	pub fn with_class(self, token: &str) -> Self {
		let Some(end) = self.root_tag_end() else {
			return self;
		};
		let existing = self.0[..end].find(r#" class=""#).and_then(|start| {
			let value_start = start + r#" class=""#.len();
			self.0[value_start..end]
				.find('"')
				.map(|len| (value_start, value_start + len))
		});
		match existing {
			Some((value_start, value_end)) => {
				let mut out = self.0;
				if value_end == value_start {
					out.insert_str(value_end, &escape(token));
				} else {
					out.insert_str(value_end, &format!(" {}", escape(token)));
				}
				Self(out)
			}
			None => self.with_attr("class", token),
		}
	}

	/// Byte offset of the `>` closing the root tag
	fn root_tag_end(&self) -> Option<usize> {
		let mut chars = self.0.chars();
		if chars.next() != Some('<') || !chars.next().is_some_and(|c| c.is_ascii_alphabetic()) {
			return None;
		}
		// Attribute values are escaped, so the first '>' closes the tag.
		self.0.find('>')
	}

	fn insertion_point(&self) -> Option<usize> {
		let end = self.root_tag_end()?;
		let head = &self.0[..end];
		if head.ends_with(" /") {
			Some(end - 2)
		} else if head.ends_with('/') {
			Some(end - 1)
		} else {
			Some(end)
		}
	}
}

impl fmt::Display for Fragment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl From<Fragment> for String {
	fn from(fragment: Fragment) -> Self {
		fragment.0
	}
}

impl FromIterator<Fragment> for Fragment {
	fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
		let mut out = Fragment::default();
		for fragment in iter {
			out.push(fragment);
		}
		out
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_with_attr_before_self_closing_slash() {
		// Arrange
		let input = Fragment::raw(r#"<input type="checkbox" />"#);

		// Act
		let decorated = input.with_attr("checked", "checked");

		// Assert
		assert_eq!(decorated.as_str(), r#"<input type="checkbox" checked="checked" />"#);
	}

	#[rstest]
	fn test_with_class_only_touches_root_tag() {
		// Arrange
		let form = Fragment::raw(r#"<form><input class="inner"></form>"#);

		// Act
		let decorated = form.with_class("theme-light");

		// Assert
		assert_eq!(
			decorated.as_str(),
			r#"<form class="theme-light"><input class="inner"></form>"#
		);
	}

	#[rstest]
	fn test_with_class_into_empty_class() {
		let div = Fragment::raw(r#"<div class="">x</div>"#).with_class("t");
		assert_eq!(div.as_str(), r#"<div class="t">x</div>"#);
	}

	#[rstest]
	fn test_attr_value_is_escaped() {
		let input = Fragment::raw("<input>").with_attr("pattern", r#"^"a"$"#);
		assert_eq!(input.as_str(), r#"<input pattern="^&quot;a&quot;$">"#);
	}

	#[rstest]
	fn test_wrap_and_collect() {
		// Arrange
		let items = vec![Fragment::text("a"), Fragment::text("b")];

		// Act
		let joined: Fragment = items.into_iter().map(|f| f.wrap("li", "")).collect();
		let list = joined.wrap("ul", r#"class="value-list""#);

		// Assert
		assert_eq!(list.as_str(), r#"<ul class="value-list"><li>a</li><li>b</li></ul>"#);
	}

	#[rstest]
	#[case("")]
	#[case("plain text")]
	#[case("</td>")]
	#[case("< spaced")]
	fn test_no_root_tag(#[case] markup: &str) {
		let fragment = Fragment::raw(markup);
		assert!(!fragment.has_root_tag());
		assert_eq!(fragment.clone().with_class("x"), fragment);
	}
}
