//! Form widgets
//!
//! Widgets render a single form control as HTML. Attributes are kept in
//! insertion order so that rendering the same field twice produces the same
//! bytes.

use crate::html::escape;

/// Widget type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetType {
	/// Text input field
	TextInput,
	/// Number input field
	NumberInput,
	/// Date input field
	DateInput,
	/// Local date and time input field
	DateTimeInput,
	/// Checkbox input
	Checkbox,
	/// Select dropdown
	Select,
	/// Radio button group
	RadioSelect,
}

/// Ordered attribute list for a widget
///
/// # Examples
///
/// ```
/// use vitrine_render::widgets::Attrs;
///
/// let attrs = Attrs::new().attr("minlength", "3").attr("maxlength", "50").flag("required");
/// assert_eq!(attrs.render(), r#" minlength="3" maxlength="50" required"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
	entries: Vec<(String, Option<String>)>,
}

impl Attrs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Add `key="value"`
	pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.entries.push((key.into(), Some(value.into())));
		self
	}

	/// Add `key="value"` when `value` is present
	pub fn attr_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
		match value {
			Some(v) => self.attr(key, v.to_string()),
			None => self,
		}
	}

	/// Add a bare boolean attribute such as `required`
	pub fn flag(mut self, key: impl Into<String>) -> Self {
		self.entries.push((key.into(), None));
		self
	}

	/// Add a bare boolean attribute when `on` holds
	pub fn flag_if(self, key: &str, on: bool) -> Self {
		if on { self.flag(key) } else { self }
	}

	/// Value of `key`; bare flags yield the key itself
	pub fn get<'a>(&'a self, key: &'a str) -> Option<&'a str> {
		self.entries
			.iter()
			.find(|(k, _)| k == key)
			.map(|(_, v)| v.as_deref().unwrap_or(key))
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Render as ` key="value"` pairs, each preceded by a space
	pub fn render(&self) -> String {
		let mut html = String::new();
		for (key, value) in &self.entries {
			match value {
				Some(v) => html.push_str(&format!(r#" {}="{}""#, key, escape(v))),
				None => {
					html.push(' ');
					html.push_str(key);
				}
			}
		}
		html
	}
}

/// Base widget trait
pub trait Widget: Send + Sync {
	/// Get the widget type
	fn widget_type(&self) -> WidgetType;

	/// Render the widget as HTML; `name` doubles as the element id
	fn render(&self, name: &str, value: Option<&str>, attrs: &Attrs) -> String;

	/// Render the widget with `(value, label)` choices
	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &Attrs,
		_choices: &[(String, String)],
	) -> String {
		self.render(name, value, attrs)
	}
}

/// `<input>` with a free-form value
#[derive(Debug, Clone)]
pub struct TextInput {
	input_type: &'static str,
	widget_type: WidgetType,
}

impl TextInput {
	/// Create a text input widget
	pub fn new() -> Self {
		Self {
			input_type: "text",
			widget_type: WidgetType::TextInput,
		}
	}

	/// Create a number input widget
	pub fn number() -> Self {
		Self {
			input_type: "number",
			widget_type: WidgetType::NumberInput,
		}
	}

	/// Create a date input widget
	pub fn date() -> Self {
		Self {
			input_type: "date",
			widget_type: WidgetType::DateInput,
		}
	}

	/// Create a local date-time input widget
	pub fn datetime_local() -> Self {
		Self {
			input_type: "datetime-local",
			widget_type: WidgetType::DateTimeInput,
		}
	}
}

impl Default for TextInput {
	fn default() -> Self {
		Self::new()
	}
}

impl Widget for TextInput {
	fn widget_type(&self) -> WidgetType {
		self.widget_type
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &Attrs) -> String {
		let escaped_name = escape(name);
		let mut html = format!(
			r#"<input type="{}" id="{}" name="{}""#,
			self.input_type, escaped_name, escaped_name
		);

		if let Some(v) = value {
			html.push_str(&format!(r#" value="{}""#, escape(v)));
		}

		html.push_str(&attrs.render());
		html.push_str(" />");
		html
	}
}

/// Checkbox input widget
#[derive(Debug, Clone, Default)]
pub struct CheckboxInput;

impl CheckboxInput {
	pub fn new() -> Self {
		Self
	}
}

impl Widget for CheckboxInput {
	fn widget_type(&self) -> WidgetType {
		WidgetType::Checkbox
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &Attrs) -> String {
		let escaped_name = escape(name);
		let mut html = format!(
			r#"<input type="checkbox" id="{}" name="{}""#,
			escaped_name, escaped_name
		);

		if matches!(value, Some("true" | "1" | "on")) {
			html.push_str(" checked");
		}

		html.push_str(&attrs.render());
		html.push_str(" />");
		html
	}
}

/// Select widget
#[derive(Debug, Clone, Default)]
pub struct Select;

impl Select {
	pub fn new() -> Self {
		Self
	}
}

impl Widget for Select {
	fn widget_type(&self) -> WidgetType {
		WidgetType::Select
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &Attrs) -> String {
		self.render_with_choices(name, value, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &Attrs,
		choices: &[(String, String)],
	) -> String {
		let escaped_name = escape(name);
		let mut html = format!(r#"<select id="{}" name="{}""#, escaped_name, escaped_name);
		html.push_str(&attrs.render());
		html.push('>');

		for (choice_value, choice_label) in choices {
			html.push_str(&format!(r#"<option value="{}""#, escape(choice_value)));
			if Some(choice_value.as_str()) == value {
				html.push_str(" selected");
			}
			html.push('>');
			html.push_str(&escape(choice_label));
			html.push_str("</option>");
		}

		html.push_str("</select>");
		html
	}
}

/// Radio button group
///
/// The buttons are wrapped in a `div.radio-group` carrying the field id, so the
/// group has a single root element.
#[derive(Debug, Clone, Default)]
pub struct RadioSelect;

impl RadioSelect {
	pub fn new() -> Self {
		Self
	}
}

impl Widget for RadioSelect {
	fn widget_type(&self) -> WidgetType {
		WidgetType::RadioSelect
	}

	fn render(&self, name: &str, value: Option<&str>, attrs: &Attrs) -> String {
		self.render_with_choices(name, value, attrs, &[])
	}

	fn render_with_choices(
		&self,
		name: &str,
		value: Option<&str>,
		attrs: &Attrs,
		choices: &[(String, String)],
	) -> String {
		let escaped_name = escape(name);
		let mut html = format!(r#"<div class="radio-group" id="{}">"#, escaped_name);

		for (i, (choice_value, choice_label)) in choices.iter().enumerate() {
			let input_id = format!("{}_{}", escaped_name, i);

			html.push_str(&format!(
				r#"<label for="{}"><input type="radio" id="{}" name="{}" value="{}""#,
				input_id,
				input_id,
				escaped_name,
				escape(choice_value)
			));

			if Some(choice_value.as_str()) == value {
				html.push_str(" checked");
			}

			html.push_str(&attrs.render());
			html.push_str(" /> ");
			html.push_str(&escape(choice_label));
			html.push_str("</label>");
		}

		html.push_str("</div>");
		html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn choices(values: &[&str]) -> Vec<(String, String)> {
		values
			.iter()
			.map(|v| (v.to_string(), v.to_string()))
			.collect()
	}

	#[rstest]
	fn test_text_input_render() {
		// Arrange
		let widget = TextInput::new();

		// Act
		let html = widget.render("username", Some("john"), &Attrs::new().flag("required"));

		// Assert
		assert_eq!(
			html,
			r#"<input type="text" id="username" name="username" value="john" required />"#
		);
	}

	#[rstest]
	#[case(TextInput::number(), "number", WidgetType::NumberInput)]
	#[case(TextInput::date(), "date", WidgetType::DateInput)]
	#[case(TextInput::datetime_local(), "datetime-local", WidgetType::DateTimeInput)]
	fn test_input_variants(#[case] widget: TextInput, #[case] input_type: &str, #[case] expected: WidgetType) {
		let html = widget.render("f", None, &Attrs::new());
		assert!(html.starts_with(&format!(r#"<input type="{}""#, input_type)));
		assert!(!html.contains("value="));
		assert_eq!(widget.widget_type(), expected);
	}

	#[rstest]
	#[case(Some("true"), true)]
	#[case(Some("false"), false)]
	#[case(None, false)]
	fn test_checkbox_input_render(#[case] value: Option<&str>, #[case] checked: bool) {
		let html = CheckboxInput::new().render("agree", value, &Attrs::new());
		assert!(html.contains(r#"type="checkbox""#));
		assert_eq!(html.contains(" checked"), checked);
	}

	#[rstest]
	fn test_select_render() {
		// Arrange
		let widget = Select::new();

		// Act
		let html = widget.render_with_choices("choice", Some("b"), &Attrs::new(), &choices(&["a", "b"]));

		// Assert
		assert_eq!(
			html,
			r#"<select id="choice" name="choice"><option value="a">a</option><option value="b" selected>b</option></select>"#
		);
	}

	#[rstest]
	fn test_radio_select_render() {
		// Arrange
		let widget = RadioSelect::new();

		// Act
		let html = widget.render_with_choices("role", Some("user"), &Attrs::new(), &choices(&["admin", "user"]));

		// Assert
		assert!(html.starts_with(r#"<div class="radio-group" id="role">"#));
		assert!(html.contains(r#"<input type="radio" id="role_0" name="role" value="admin" />"#));
		assert!(html.contains(r#"<input type="radio" id="role_1" name="role" value="user" checked />"#));
		assert_eq!(html.matches("checked").count(), 1);
		assert!(html.ends_with("</div>"));
	}

	#[rstest]
	fn test_attrs_escape_and_lookup() {
		// Arrange
		let attrs = Attrs::new().attr("pattern", "a\"b").flag_if("required", false).attr_opt("min", Some(0));

		// Act & Assert
		assert_eq!(attrs.render(), r#" pattern="a&quot;b" min="0""#);
		assert_eq!(attrs.get("min"), Some("0"));
		assert_eq!(attrs.get("required"), None);
	}

	#[rstest]
	fn test_attrs_get_flag_returns_its_name() {
		// Arrange
		let attrs = Attrs::new().flag("required").attr("min", "1");

		// Act
		let required = attrs.get("required");

		// Assert
		assert_eq!(required, Some("required"));
		assert_eq!(attrs.get("min"), Some("1"));
		assert!(!attrs.is_empty());
	}
}
