//! Error types
//!
//! Configuration is the only thing that can fail. Unsupported field types and
//! depth limits are handled by fallback rendering, never by errors.

/// Invalid render options
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
	#[error("Unknown live-update mode '{0}' (expected none, per-field or whole-form)")]
	UnknownLiveUpdateMode(String),

	#[error("Maximum depth must be non-negative, got {0}")]
	NegativeMaxDepth(i64),

	#[error("Failed to parse render options: {0}")]
	Parse(String),
}

/// Result type for configuration handling
pub type Result<T> = std::result::Result<T, ConfigurationError>;

impl From<toml::de::Error> for ConfigurationError {
	fn from(error: toml::de::Error) -> Self {
		ConfigurationError::Parse(error.to_string())
	}
}
