//! Render configuration
//!
//! Options arrive as a loosely typed [`RenderOptions`] value (built in code or
//! loaded from TOML) and are checked once by [`RenderOptions::validate`], which
//! yields the immutable [`RenderConfig`] threaded through the recursion.
//!
//! ```toml
//! editable = true
//! theme = "dark"
//! live_update = "per-field"
//! max_depth = 2
//! refresh_url = "/refresh"
//! stylesheet = { kind = "link", value = "/static/models.css" }
//! ```

use crate::error::{ConfigurationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default endpoint for whole-form submissions
pub const DEFAULT_SUBMIT_URL: &str = "/submit";

/// Default endpoint for per-field updates
pub const DEFAULT_FIELD_UPDATE_URL: &str = "/update-field";

/// Default polling trigger of a read-only view with a refresh endpoint
pub const DEFAULT_REFRESH_TRIGGER: &str = "every 10s";

/// Which elements carry change-triggered update attributes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LiveUpdateMode {
	/// No live-update attributes
	#[default]
	None,
	/// Each editable field posts its own change
	PerField,
	/// The form root submits the whole form on any change
	WholeForm,
}

impl LiveUpdateMode {
	pub fn as_str(&self) -> &'static str {
		match self {
			LiveUpdateMode::None => "none",
			LiveUpdateMode::PerField => "per-field",
			LiveUpdateMode::WholeForm => "whole-form",
		}
	}
}

impl fmt::Display for LiveUpdateMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Parse a mode name
///
/// Names match exactly: no case folding, no trimming. `inline` and `full` are
/// accepted as older names for `per-field` and `whole-form`.
///
/// # Examples
///
/// ```
/// use vitrine_render::config::LiveUpdateMode;
///
/// assert_eq!("per-field".parse(), Ok(LiveUpdateMode::PerField));
/// assert_eq!("full".parse(), Ok(LiveUpdateMode::WholeForm));
/// assert!("sometimes".parse::<LiveUpdateMode>().is_err());
/// assert!("".parse::<LiveUpdateMode>().is_err());
/// ```
impl FromStr for LiveUpdateMode {
	type Err = ConfigurationError;

	fn from_str(s: &str) -> Result<Self> {
		match s {
			"none" => Ok(LiveUpdateMode::None),
			"per-field" | "inline" => Ok(LiveUpdateMode::PerField),
			"whole-form" | "full" => Ok(LiveUpdateMode::WholeForm),
			_ => Err(ConfigurationError::UnknownLiveUpdateMode(s.to_string())),
		}
	}
}

/// Where the generated document gets its styles from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Stylesheet {
	/// Inline the built-in CSS for the configured theme
	#[default]
	Builtin,
	/// Inline the given CSS
	Inline(String),
	/// Reference an external stylesheet
	Link(String),
	/// No style block
	None,
}

/// Render options as supplied by the caller
///
/// Every field has a default, so partial TOML documents are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
	pub editable: bool,
	pub theme: Option<String>,
	pub live_update: String,
	pub max_depth: Option<i64>,
	pub stylesheet: Stylesheet,
	pub show_title: bool,
	pub submit_url: String,
	pub field_update_url: String,
	/// Endpoint a read-only view polls for fresh markup; off when unset
	pub refresh_url: Option<String>,
	pub refresh_trigger: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			editable: false,
			theme: None,
			live_update: LiveUpdateMode::None.to_string(),
			max_depth: None,
			stylesheet: Stylesheet::Builtin,
			show_title: true,
			submit_url: DEFAULT_SUBMIT_URL.to_string(),
			field_update_url: DEFAULT_FIELD_UPDATE_URL.to_string(),
			refresh_url: None,
			refresh_trigger: DEFAULT_REFRESH_TRIGGER.to_string(),
		}
	}
}

impl RenderOptions {
	/// Read-only rendering, no theme, no live updates, unbounded depth
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::config::RenderOptions;
	///
	/// let options = RenderOptions::new()
	///     .editable(true)
	///     .with_live_update("whole-form")
	///     .with_max_depth(2);
	/// assert!(options.editable);
	/// assert_eq!(options.max_depth, Some(2));
	/// ```
	pub fn new() -> Self {
		Self::default()
	}

	/// Load options from a TOML document
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::config::{RenderOptions, Stylesheet};
	///
	/// let options = RenderOptions::from_toml_str(r#"
	///     editable = true
	///     theme = "dark"
	///     stylesheet = { kind = "link", value = "/static/models.css" }
	/// "#).unwrap();
	/// assert_eq!(options.theme.as_deref(), Some("dark"));
	/// assert_eq!(options.stylesheet, Stylesheet::Link("/static/models.css".into()));
	/// assert_eq!(options.live_update, "none");
	/// ```
	pub fn from_toml_str(source: &str) -> Result<Self> {
		Ok(toml::from_str(source)?)
	}

	pub fn editable(mut self, editable: bool) -> Self {
		self.editable = editable;
		self
	}

	pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
		self.theme = Some(theme.into());
		self
	}

	pub fn with_live_update(mut self, mode: impl ToString) -> Self {
		self.live_update = mode.to_string();
		self
	}

	pub fn with_max_depth(mut self, max_depth: i64) -> Self {
		self.max_depth = Some(max_depth);
		self
	}

	pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
		self.stylesheet = stylesheet;
		self
	}

	pub fn without_title(mut self) -> Self {
		self.show_title = false;
		self
	}

	pub fn with_submit_url(mut self, url: impl Into<String>) -> Self {
		self.submit_url = url.into();
		self
	}

	pub fn with_field_update_url(mut self, url: impl Into<String>) -> Self {
		self.field_update_url = url.into();
		self
	}

	/// Let read-only views poll `url` for fresh markup
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::config::RenderOptions;
	///
	/// let config = RenderOptions::new().with_refresh("/refresh").validate().unwrap();
	/// assert_eq!(config.refresh_url(), Some("/refresh"));
	/// assert_eq!(config.refresh_trigger(), "every 10s");
	/// ```
	pub fn with_refresh(mut self, url: impl Into<String>) -> Self {
		self.refresh_url = Some(url.into());
		self
	}

	pub fn with_refresh_trigger(mut self, trigger: impl Into<String>) -> Self {
		self.refresh_trigger = trigger.into();
		self
	}

	/// Check the options and produce the immutable configuration
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::config::{LiveUpdateMode, RenderOptions};
	/// use vitrine_render::ConfigurationError;
	///
	/// let config = RenderOptions::new().with_live_update("per-field").validate().unwrap();
	/// assert_eq!(config.live_update(), LiveUpdateMode::PerField);
	///
	/// let err = RenderOptions::new().with_max_depth(-1).validate().unwrap_err();
	/// assert_eq!(err, ConfigurationError::NegativeMaxDepth(-1));
	/// ```
	pub fn validate(&self) -> Result<RenderConfig> {
		let live_update = self.live_update.parse::<LiveUpdateMode>().inspect_err(|e| {
			tracing::warn!("Rejected render options: {}", e);
		})?;

		let max_depth = match self.max_depth {
			None => None,
			Some(depth) => match usize::try_from(depth) {
				Ok(depth) => Some(depth),
				Err(_) => {
					let error = ConfigurationError::NegativeMaxDepth(depth);
					tracing::warn!("Rejected render options: {}", error);
					return Err(error);
				}
			},
		};

		Ok(RenderConfig {
			editable: self.editable,
			theme: self.theme.clone().filter(|t| !t.trim().is_empty()),
			live_update,
			max_depth,
			stylesheet: self.stylesheet.clone(),
			show_title: self.show_title,
			submit_url: self.submit_url.clone(),
			field_update_url: self.field_update_url.clone(),
			refresh_url: self.refresh_url.clone().filter(|u| !u.trim().is_empty()),
			refresh_trigger: match self.refresh_trigger.trim() {
				"" => DEFAULT_REFRESH_TRIGGER.to_string(),
				trigger => trigger.to_string(),
			},
		})
	}
}

/// Validated, immutable render configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
	editable: bool,
	theme: Option<String>,
	live_update: LiveUpdateMode,
	max_depth: Option<usize>,
	stylesheet: Stylesheet,
	show_title: bool,
	submit_url: String,
	field_update_url: String,
	refresh_url: Option<String>,
	refresh_trigger: String,
}

impl Default for RenderConfig {
	fn default() -> Self {
		Self {
			editable: false,
			theme: None,
			live_update: LiveUpdateMode::None,
			max_depth: None,
			stylesheet: Stylesheet::Builtin,
			show_title: true,
			submit_url: DEFAULT_SUBMIT_URL.to_string(),
			field_update_url: DEFAULT_FIELD_UPDATE_URL.to_string(),
			refresh_url: None,
			refresh_trigger: DEFAULT_REFRESH_TRIGGER.to_string(),
		}
	}
}

impl RenderConfig {
	/// Read-only defaults with the given stylesheet
	pub(crate) fn read_only(stylesheet: Stylesheet) -> Self {
		Self {
			stylesheet,
			..Self::default()
		}
	}

	pub fn editable(&self) -> bool {
		self.editable
	}

	pub fn theme(&self) -> Option<&str> {
		self.theme.as_deref()
	}

	pub fn live_update(&self) -> LiveUpdateMode {
		self.live_update
	}

	/// `None` means unbounded
	pub fn max_depth(&self) -> Option<usize> {
		self.max_depth
	}

	pub fn stylesheet(&self) -> &Stylesheet {
		&self.stylesheet
	}

	pub fn show_title(&self) -> bool {
		self.show_title
	}

	pub fn submit_url(&self) -> &str {
		&self.submit_url
	}

	pub fn field_update_url(&self) -> &str {
		&self.field_update_url
	}

	pub fn refresh_url(&self) -> Option<&str> {
		self.refresh_url.as_deref()
	}

	pub fn refresh_trigger(&self) -> &str {
		&self.refresh_trigger
	}

	/// Whether descending to `depth` stays within the bound
	///
	/// # Examples
	///
	/// ```
	/// use vitrine_render::config::RenderOptions;
	///
	/// let bounded = RenderOptions::new().with_max_depth(1).validate().unwrap();
	/// assert!(bounded.allows_depth(1));
	/// assert!(!bounded.allows_depth(2));
	///
	/// let unbounded = RenderOptions::new().validate().unwrap();
	/// assert!(unbounded.allows_depth(1_000));
	/// ```
	pub fn allows_depth(&self, depth: usize) -> bool {
		self.max_depth.is_none_or(|max| depth <= max)
	}
}
