//! Error types for document configuration.

/// Error type for loading [`DocumentOptions`](crate::DocumentOptions).
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}
