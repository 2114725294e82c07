//! Built-in stylesheets
//!
//! Three stylesheets ship with the renderer: the default one, `light` and
//! `dark`. Unknown theme names still get a theme class on the container but
//! fall back to the default stylesheet.

/// Stylesheet used when no theme, or an unknown one, is configured
pub const DEFAULT_CSS: &str = r#"
.vitrine-model {
	font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
	border: 1px solid #ddd;
	border-radius: 4px;
	padding: 1rem;
	margin: 1rem 0;
	box-shadow: 0 1px 3px rgba(0, 0, 0, 0.1);
}
.model-title { margin: 0 0 0.75rem; font-size: 1.25rem; color: #333; }
.model-fields, .model-mapping { border-collapse: collapse; width: 100%; }
.model-fields th, .model-fields td, .model-mapping th, .model-mapping td {
	padding: 0.5rem;
	text-align: left;
	border-bottom: 1px solid #eee;
}
.field-name, .mapping-key { font-weight: 600; color: #555; width: 30%; }
.field-value { font-family: monospace; }
.field-nested, .field-list { padding: 0; }
.value-list, .record-list, .mapping-entries { margin: 0; padding-left: 1.25rem; }
.list-item { padding: 0.25rem 0; border-bottom: 1px solid #f0f0f0; }
.list-item:last-child { border-bottom: none; }
.form-field { margin-bottom: 1rem; }
.form-field label { display: block; font-weight: 600; margin-bottom: 0.25rem; color: #555; }
.form-field input, .form-field select {
	width: 100%;
	padding: 0.5rem;
	border: 1px solid #ddd;
	border-radius: 4px;
	font: inherit;
}
.form-field input[type="checkbox"], .form-field input[type="radio"] { width: auto; margin-right: 0.5rem; }
.form-field fieldset { border: 1px solid #eee; border-radius: 4px; }
.field-readonly { color: #888; font-style: italic; }
.form-actions { margin-top: 1.5rem; text-align: right; }
.submit-button {
	background-color: #4a90e2;
	color: #fff;
	border: none;
	border-radius: 4px;
	padding: 0.5rem 1.5rem;
	cursor: pointer;
}
.submit-button:hover { background-color: #3b7fd1; }
"#;

/// Light theme
pub const LIGHT_CSS: &str = r#"
.vitrine-model {
	font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
	background-color: #fff;
	border: 1px solid #e0e0e0;
	border-radius: 8px;
	padding: 1.25rem;
	margin: 1.25rem 0;
	box-shadow: 0 2px 5px rgba(0, 0, 0, 0.05);
}
.model-title { margin: 0 0 1rem; padding-bottom: 0.5rem; font-size: 1.5rem; color: #333; border-bottom: 1px solid #f0f0f0; }
.model-fields, .model-mapping { border-collapse: collapse; width: 100%; }
.model-fields th, .model-fields td, .model-mapping th, .model-mapping td {
	padding: 0.75rem;
	text-align: left;
	border-bottom: 1px solid #f0f0f0;
}
.field-name, .mapping-key { font-weight: 600; color: #444; width: 30%; background-color: #fafafa; }
.field-value { font-family: Menlo, Monaco, "Courier New", monospace; color: #333; }
.field-nested, .field-list { padding: 0; }
.list-item { padding: 0.5rem 0; border-bottom: 1px solid #f5f5f5; }
.list-item:last-child { border-bottom: none; }
.form-field { margin-bottom: 1.25rem; }
.form-field label { display: block; font-weight: 600; margin-bottom: 0.5rem; color: #444; }
.form-field input, .form-field select {
	width: 100%;
	padding: 0.75rem;
	border: 1px solid #e0e0e0;
	border-radius: 6px;
	font: inherit;
}
.form-field input:focus, .form-field select:focus { outline: none; border-color: #4a90e2; }
.form-field input[type="checkbox"], .form-field input[type="radio"] { width: auto; margin-right: 0.5rem; }
.field-readonly { color: #999; font-style: italic; }
.form-actions { margin-top: 2rem; text-align: right; }
.submit-button {
	background-color: #4a90e2;
	color: #fff;
	border: none;
	border-radius: 6px;
	padding: 0.75rem 2rem;
	cursor: pointer;
}
.submit-button:hover { background-color: #3b7fd1; }
"#;

/// Dark theme
pub const DARK_CSS: &str = r#"
.vitrine-model {
	font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
	background-color: #1e1e1e;
	color: #e0e0e0;
	border: 1px solid #333;
	border-radius: 8px;
	padding: 1.25rem;
	margin: 1.25rem 0;
	box-shadow: 0 2px 5px rgba(0, 0, 0, 0.2);
}
.model-title { margin: 0 0 1rem; padding-bottom: 0.5rem; font-size: 1.5rem; color: #fff; border-bottom: 1px solid #333; }
.model-fields, .model-mapping { border-collapse: collapse; width: 100%; }
.model-fields th, .model-fields td, .model-mapping th, .model-mapping td {
	padding: 0.75rem;
	text-align: left;
	border-bottom: 1px solid #333;
}
.field-name, .mapping-key { font-weight: 600; color: #bbb; width: 30%; background-color: #252525; }
.field-value { font-family: Menlo, Monaco, "Courier New", monospace; color: #e0e0e0; }
.field-nested, .field-list { padding: 0; }
.list-item { padding: 0.5rem 0; border-bottom: 1px solid #333; }
.list-item:last-child { border-bottom: none; }
.form-field { margin-bottom: 1.25rem; }
.form-field label { display: block; font-weight: 600; margin-bottom: 0.5rem; color: #bbb; }
.form-field input, .form-field select {
	width: 100%;
	padding: 0.75rem;
	background-color: #2d2d2d;
	color: #e0e0e0;
	border: 1px solid #444;
	border-radius: 6px;
	font: inherit;
}
.form-field input:focus, .form-field select:focus { outline: none; border-color: #5c9ce6; }
.form-field input[type="checkbox"], .form-field input[type="radio"] { width: auto; margin-right: 0.5rem; }
.field-readonly { color: #888; font-style: italic; }
.form-actions { margin-top: 2rem; text-align: right; }
.submit-button {
	background-color: #5c9ce6;
	color: #fff;
	border: none;
	border-radius: 6px;
	padding: 0.75rem 2rem;
	cursor: pointer;
}
.submit-button:hover { background-color: #4a8ad4; }
"#;

/// Stylesheet for a theme name
///
/// # Examples
///
/// ```
/// use vitrine_render::themes::{theme_css, DARK_CSS, DEFAULT_CSS};
///
/// assert_eq!(theme_css(Some("dark")), DARK_CSS);
/// assert_eq!(theme_css(Some("solarized")), DEFAULT_CSS);
/// assert_eq!(theme_css(None), DEFAULT_CSS);
/// ```
pub fn theme_css(theme: Option<&str>) -> &'static str {
	match theme.map(|t| t.trim().to_ascii_lowercase()).as_deref() {
		Some("light") => LIGHT_CSS,
		Some("dark") => DARK_CSS,
		_ => DEFAULT_CSS,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Some("light"), LIGHT_CSS)]
	#[case(Some("Dark"), DARK_CSS)]
	#[case(Some("corporate"), DEFAULT_CSS)]
	#[case(None, DEFAULT_CSS)]
	fn test_theme_css_lookup(#[case] theme: Option<&str>, #[case] expected: &str) {
		assert_eq!(theme_css(theme), expected);
	}

	#[rstest]
	fn test_stylesheets_cover_generated_classes() {
		for css in [DEFAULT_CSS, LIGHT_CSS, DARK_CSS] {
			for class in [".vitrine-model", ".model-fields", ".form-field", ".submit-button"] {
				assert!(css.contains(class), "missing {}", class);
			}
		}
	}
}
