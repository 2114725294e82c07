//! Attribute injection
//!
//! Decorates already built fragments with the theme class and the htmx
//! attributes of the configured live-update mode, or with the auto-refresh
//! hook of a read-only view. Only the root tag of a fragment is touched;
//! fragments without one (plain text) pass through.

use crate::classify::FieldKind;
use crate::config::{LiveUpdateMode, RenderConfig};
use crate::fragment::Fragment;
use crate::path::FieldPath;

/// Trigger for a single field posting its own change
pub const FIELD_TRIGGER: &str = "change";

/// Trigger for the whole form, debounced
pub const FORM_TRIGGER: &str = "change delay:500ms";

/// Class token for a theme name
///
/// # Examples
///
/// ```
/// use vitrine_render::attrs::theme_class;
///
/// assert_eq!(theme_class("dark"), "theme-dark");
/// ```
pub fn theme_class(theme: &str) -> String {
	format!("theme-{}", theme.trim())
}

/// Decorate the fragment of one field
///
/// The theme class goes on any fragment with a root tag. In per-field mode,
/// editable controls also get `hx-post` (scoped to `path`) and `hx-trigger`.
///
/// # Examples
///
/// ```
/// use vitrine_render::attrs::decorate;
/// use vitrine_render::classify::FieldKind;
/// use vitrine_render::config::RenderOptions;
/// use vitrine_render::path::FieldPath;
/// use vitrine_render::Fragment;
///
/// let config = RenderOptions::new()
///     .editable(true)
///     .with_live_update("per-field")
///     .validate()
///     .unwrap();
/// let input = Fragment::raw(r#"<input type="text" id="name" name="name" />"#);
/// let decorated = decorate(input, FieldKind::Text, &FieldPath::root().field("name"), &config);
/// assert_eq!(
///     decorated.as_str(),
///     r#"<input type="text" id="name" name="name" hx-post="/update-field?field=name" hx-trigger="change" />"#
/// );
/// ```
pub fn decorate(fragment: Fragment, kind: FieldKind, path: &FieldPath, config: &RenderConfig) -> Fragment {
	let fragment = with_theme(fragment, config);
	if config.editable() && kind.is_editable() && config.live_update() == LiveUpdateMode::PerField {
		let url = field_update_url(config.field_update_url(), path);
		fragment
			.with_attr("hx-post", &url)
			.with_attr("hx-trigger", FIELD_TRIGGER)
	} else {
		fragment
	}
}

/// Per-field endpoint, with the path as a form-encoded `field` parameter
///
/// # Examples
///
/// ```
/// use vitrine_render::attrs::field_update_url;
/// use vitrine_render::path::FieldPath;
///
/// let path = FieldPath::root().field("offices").key("R&D").field("city");
/// assert_eq!(
///     field_update_url("/update-field", &path),
///     "/update-field?field=offices%5BR%26D%5D.city"
/// );
/// assert_eq!(
///     field_update_url("/api?v=2", &FieldPath::root().field("age")),
///     "/api?v=2&field=age"
/// );
/// ```
pub fn field_update_url(base: &str, path: &FieldPath) -> String {
	let field: String = url::form_urlencoded::byte_serialize(path.to_string().as_bytes()).collect();
	let separator = if base.contains('?') { '&' } else { '?' };
	format!("{}{}field={}", base, separator, field)
}

/// Decorate the outermost container, a `<table>` or a `<form>`
///
/// In whole-form mode the form is the only element that carries live-update
/// attributes. A read-only table polls its refresh endpoint when one is
/// configured.
pub fn decorate_form(fragment: Fragment, config: &RenderConfig) -> Fragment {
	let fragment = with_theme(fragment, config);
	if config.editable() {
		if config.live_update() == LiveUpdateMode::WholeForm {
			return fragment
				.with_attr("hx-post", config.submit_url())
				.with_attr("hx-trigger", FORM_TRIGGER);
		}
		return fragment;
	}
	match config.refresh_url() {
		Some(url) => fragment
			.with_attr("hx-get", url)
			.with_attr("hx-trigger", config.refresh_trigger()),
		None => fragment,
	}
}

fn with_theme(fragment: Fragment, config: &RenderConfig) -> Fragment {
	match config.theme() {
		Some(theme) => fragment.with_class(&theme_class(theme)),
		None => fragment,
	}
}
