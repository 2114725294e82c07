//! HTML escaping

/// Escape HTML special characters
///
/// Safe for both text content and double-quoted attribute values.
///
/// # Examples
///
/// ```
/// use vitrine_render::html::escape;
///
/// assert_eq!(escape("Hello, World!"), "Hello, World!");
/// assert_eq!(escape("<b>\"A\" & 'B'</b>"),
///            "&lt;b&gt;&quot;A&quot; &amp; &#x27;B&#x27;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
	let mut result = String::with_capacity(text.len() + 10);
	for ch in text.chars() {
		match ch {
			'&' => result.push_str("&amp;"),
			'<' => result.push_str("&lt;"),
			'>' => result.push_str("&gt;"),
			'"' => result.push_str("&quot;"),
			'\'' => result.push_str("&#x27;"),
			_ => result.push(ch),
		}
	}
	result
}
