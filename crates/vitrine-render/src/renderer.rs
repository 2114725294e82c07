//! Top-level rendering
//!
//! [`render`] validates the options, walks the model from the root and wraps
//! the container in the document fragment:
//!
//! ```text
//! [<style>…</style> | <link rel="stylesheet" href="…">]
//! <div class="vitrine-model">
//!   <h2 class="model-title">User</h2>
//!   <table class="model-fields">…</table>   or   <form class="model-form">…</form>
//! </div>
//! ```

use crate::config::{RenderConfig, RenderOptions, Stylesheet};
use crate::error::Result;
use crate::fragment::Fragment;
use crate::html::escape;
use crate::path::FieldPath;
use crate::recursor::render_record;
use crate::themes::{DEFAULT_CSS, theme_css};
use vitrine_schema::Model;

/// Render a model with the given options
///
/// Options are validated before anything is traversed; on error no markup is
/// produced.
///
/// # Examples
///
/// ```
/// use vitrine_render::config::{RenderOptions, Stylesheet};
/// use vitrine_render::{render, ConfigurationError};
/// use vitrine_schema::{DeclaredType, Record};
///
/// let user = Record::builder("User").field("name", DeclaredType::Text, "John Doe");
///
/// let html = render(&user, &RenderOptions::new().with_stylesheet(Stylesheet::None)).unwrap();
/// assert!(html.starts_with(r#"<div class="vitrine-model"><h2 class="model-title">User</h2><table"#));
///
/// let err = render(&user, &RenderOptions::new().with_live_update("sometimes")).unwrap_err();
/// assert_eq!(err, ConfigurationError::UnknownLiveUpdateMode("sometimes".into()));
/// ```
pub fn render<M: Model + ?Sized>(model: &M, options: &RenderOptions) -> Result<String> {
	let config = options.validate()?;
	Ok(render_with_config(model, &config))
}

/// Render a model with an already validated configuration
pub fn render_with_config<M: Model + ?Sized>(model: &M, config: &RenderConfig) -> String {
	let record = model.to_record();
	tracing::debug!(
		model = record.type_name(),
		editable = config.editable(),
		live_update = %config.live_update(),
		max_depth = ?config.max_depth(),
		"Rendering model"
	);

	let container = render_record(&record, &FieldPath::root(), 0, config);
	let mut document = style_block(config);
	document.push(document_body(record.type_name(), config.show_title(), container));
	document.into_string()
}

/// Read-only rendering with a simple stylesheet switch
///
/// Custom CSS wins when given; otherwise the default stylesheet is included
/// when `include_styles` holds.
///
/// # Examples
///
/// ```
/// use vitrine_render::model_to_html;
/// use vitrine_schema::{DeclaredType, Record};
///
/// let user = Record::builder("User").field("name", DeclaredType::Text, "Ann");
///
/// let html = model_to_html(&user, false, Some("td { color: red; }"));
/// assert!(html.starts_with("<style>td { color: red; }</style>"));
///
/// let bare = model_to_html(&user, false, None);
/// assert!(bare.starts_with(r#"<div class="vitrine-model">"#));
/// ```
pub fn model_to_html<M: Model + ?Sized>(model: &M, include_styles: bool, custom_css: Option<&str>) -> String {
	let stylesheet = match custom_css {
		Some(css) => Stylesheet::Inline(css.to_string()),
		None if include_styles => Stylesheet::Inline(DEFAULT_CSS.to_string()),
		None => Stylesheet::None,
	};
	render_with_config(model, &RenderConfig::read_only(stylesheet))
}

fn style_block(config: &RenderConfig) -> Fragment {
	match config.stylesheet() {
		Stylesheet::Builtin => Fragment::raw(theme_css(config.theme())).wrap("style", ""),
		Stylesheet::Inline(css) => Fragment::raw(css.as_str()).wrap("style", ""),
		Stylesheet::Link(href) => Fragment::raw(format!(
			r#"<link rel="stylesheet" href="{}">"#,
			escape(href)
		)),
		Stylesheet::None => Fragment::default(),
	}
}

fn document_body(type_name: &str, show_title: bool, container: Fragment) -> Fragment {
	let mut body = if show_title {
		Fragment::text(type_name).wrap("h2", r#"class="model-title""#)
	} else {
		Fragment::default()
	};
	body.push(container);
	body.wrap("div", r#"class="vitrine-model""#)
}
