//! Packer configuration.

use crate::validate::PackingLimits;
#[cfg(feature = "serde")]
use crate::error::PackError;
#[cfg(feature = "serde")]
use std::path::Path;

/// Configuration for a packing run.
///
/// # Examples
///
/// ```
/// use u_packer::packager::PackerConfig;
/// use u_packer::validate::PackingLimits;
///
/// let config = PackerConfig::default()
///     .with_limits(PackingLimits::default().with_max_items(12));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PackerConfig {
    /// Limits checked before each line is solved.
    pub limits: PackingLimits,
}

impl PackerConfig {
    pub fn with_limits(mut self, limits: PackingLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.limits.validate()
    }

    /// Parses configuration from a TOML string. Missing fields keep their
    /// defaults.
    ///
    /// ```
    /// use u_packer::packager::PackerConfig;
    ///
    /// let config = PackerConfig::from_toml_str(r#"
    ///     [limits]
    ///     max_items = 10
    /// "#).unwrap();
    ///
    /// assert_eq!(config.limits.max_items, 10);
    /// assert_eq!(config.limits.max_capacity, 100.0);
    /// ```
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self, PackError> {
        let config: Self = toml::from_str(s)?;
        config.validate().map_err(PackError::Config)?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// Any failure, including an unreadable file, is a configuration error.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, PackError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            PackError::Config(format!("cannot read config {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&contents)
    }
}
