//! Document assembly options.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Selects between corrected output and the legacy page layout.
///
/// | Behavior | `Standard` | `Legacy` |
/// |----------|------------|----------|
/// | Title text | escaped | inserted verbatim |
/// | Description meta | `name="description"` | `name="keywords"` |
/// | Absolute style URL | one `<link>` | two identical `<link>`s |
/// | Relative style URL | one `<link>` | `<link>` followed by the bare URL |
/// | Relative script URL | `<script src>` | the bare URL |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compatibility {
	/// Corrected output.
	#[default]
	Standard,
	/// Legacy layout, kept for pages that depend on it.
	Legacy,
}

impl Compatibility {
	/// Returns `true` for [`Compatibility::Legacy`].
	pub fn is_legacy(self) -> bool {
		matches!(self, Compatibility::Legacy)
	}
}

/// Options for document rendering.
///
/// # Example
///
/// ```
/// use hyperbuild_page::{Compatibility, DocumentOptions};
///
/// let options = DocumentOptions::from_toml_str(r#"compatibility = "legacy""#).unwrap();
/// assert_eq!(options, DocumentOptions::new().legacy());
/// assert_eq!(options.compatibility, Compatibility::Legacy);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DocumentOptions {
	/// Output compatibility mode.
	pub compatibility: Compatibility,
}

impl DocumentOptions {
	/// Creates new default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the compatibility mode.
	pub fn compatibility(mut self, compatibility: Compatibility) -> Self {
		self.compatibility = compatibility;
		self
	}

	/// Switches to [`Compatibility::Legacy`].
	pub fn legacy(self) -> Self {
		self.compatibility(Compatibility::Legacy)
	}

	/// Parses options from a TOML document.
	///
	/// Missing keys take their defaults; unknown keys are rejected.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}
}
