//! Pass configuration supplied by the host

use serde::Deserialize;

use crate::Result;

/// Options the host passes alongside the transform.
///
/// Recognized options:
///
/// - `exclude`: ordered sequence of keys that are never substituted.
///   Absent means no exclusions.
///
/// Unknown option keys are ignored, so a host can hand over a larger
/// options blob unchanged.
///
/// # Example
///
/// ```
/// use envfold::InlineConfig;
///
/// let config = InlineConfig::with_exclude(["SECRET"]);
/// assert!(config.is_excluded("SECRET"));
/// assert!(!config.is_excluded("FOO"));
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InlineConfig {
    /// Keys exempted from substitution
    #[serde(default)]
    pub exclude: Option<Vec<String>>,
}

impl InlineConfig {
    /// Create a configuration with no exclusions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration excluding the given keys.
    pub fn with_exclude<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            exclude: Some(keys.into_iter().map(Into::into).collect()),
        }
    }

    /// Parse a configuration from a host-supplied JSON blob.
    ///
    /// # Errors
    ///
    /// Returns `EnvfoldError::Config` if the blob is not valid JSON or the
    /// recognized options have the wrong shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether a key is exempted from substitution.
    pub fn is_excluded(&self, key: &str) -> bool {
        match &self.exclude {
            Some(keys) => keys.iter().any(|k| k == key),
            None => false,
        }
    }
}
