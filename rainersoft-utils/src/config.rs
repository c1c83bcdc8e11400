//! Caller-owned configuration.

use crate::error::UtilsResult;
use rainersoft_search::DEFAULT_FUZZY_THRESHOLD;
use rainersoft_types::{Error, Locale};
use rainersoft_validation::PasswordRequirements;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Settings shared by every [`Toolkit`](crate::Toolkit) call.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```json
/// { "locale": "en-US", "password": { "min_length": 12 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtilsConfig {
    pub locale: Locale,
    pub password: PasswordRequirements,
    pub fuzzy_threshold: f64,
    pub case_sensitive_search: bool,
}

impl Default for UtilsConfig {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            password: PasswordRequirements::default(),
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            case_sensitive_search: false,
        }
    }
}

impl UtilsConfig {
    /// Parses and validates a JSON document.
    pub fn from_json(json: &str) -> UtilsResult<Self> {
        let config: Self = serde_json::from_str(json).map_err(Error::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON file.
    pub fn load(path: impl AsRef<Path>) -> UtilsResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        info!(path = %path.display(), locale = %config.locale, "loaded configuration");
        Ok(config)
    }

    /// Checks value ranges that serde cannot express.
    pub fn validate(&self) -> UtilsResult<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_threshold) {
            return Err(Error::InvalidConfig(format!(
                "fuzzy_threshold must be between 0 and 1, got {}",
                self.fuzzy_threshold
            ))
            .into());
        }
        if self.password.min_length == 0 {
            return Err(
                Error::InvalidConfig("password.min_length must be at least 1".into()).into(),
            );
        }
        Ok(())
    }

    /// Copy of this config with another locale.
    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }
}
