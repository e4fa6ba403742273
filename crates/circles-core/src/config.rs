//! Traversal configuration.
//!
//! Values are layered with figment, later sources overriding earlier ones:
//!
//! 1. Built-in defaults (everyone, no circle cap)
//! 2. `circles.toml` in the working directory, if present
//! 3. `CIRCLES_*` environment variables (`CIRCLES_FILTER`, `CIRCLES_MAX_LEVEL`)
//!
//! ```toml
//! filter = "female"
//! max_level = 2
//! ```

use figment::providers::{Env, Format, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::filter::GenderFilter;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "circles.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "CIRCLES_";

/// Configuration for building a [`crate::FriendsIterator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CirclesConfig {
    /// Filter name: `everyone`, `male` or `female`.
    pub filter: String,
    /// Maximum number of circles to visit (`None` = unbounded, `0` = none).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_level: Option<usize>,
}

impl Default for CirclesConfig {
    fn default() -> Self {
        Self {
            filter: GenderFilter::Everyone.as_str().to_string(),
            max_level: None,
        }
    }
}

impl CirclesConfig {
    /// Loads configuration from `circles.toml` and `CIRCLES_*` variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source holds values of the wrong type, or
    /// `Error::InvalidFilter` if the resulting filter name is unknown.
    pub fn load() -> Result<Self> {
        Self::extract(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Loads configuration from a TOML file, then `CIRCLES_*` variables.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist or cannot be
    /// extracted, or `Error::InvalidFilter` if the filter name is unknown.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Self::extract(
            Figment::new()
                .merge(Toml::file(path))
                .merge(Env::prefixed(ENV_PREFIX)),
        )
    }

    /// Parses configuration from TOML text only.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` on malformed TOML or wrong value types, or
    /// `Error::InvalidFilter` if the filter name is unknown.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Self::extract(Figment::new().merge(Toml::string(toml)))
    }

    /// Checks that the configured filter names a known variant.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` otherwise.
    pub fn validate(&self) -> Result<()> {
        self.gender_filter().map(|_| ())
    }

    /// Resolves the configured filter name.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidFilter` if the name is unknown.
    pub fn gender_filter(&self) -> Result<GenderFilter> {
        self.filter.parse()
    }

    /// Serializes this configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    fn extract(figment: Figment) -> Result<Self> {
        let config: Self = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        tracing::debug!(filter = %config.filter, max_level = ?config.max_level, "Configuration loaded");
        Ok(config)
    }
}
