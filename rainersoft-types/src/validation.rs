//! Structured validation outcome.

use serde::{Deserialize, Serialize};

/// Result of a validator call.
///
/// `is_valid` is true exactly when `errors` is empty; the constructors keep
/// the two fields in agreement, so callers may check either one. Deserializing
/// recomputes `isValid` from `errors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "ValidationResultRepr")]
pub struct ValidationResult {
    is_valid: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    errors: Vec<String>,
}

#[derive(Deserialize)]
struct ValidationResultRepr {
    #[serde(default)]
    errors: Vec<String>,
}

impl From<ValidationResultRepr> for ValidationResult {
    fn from(repr: ValidationResultRepr) -> Self {
        Self::from_errors(repr.errors)
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}

impl ValidationResult {
    /// A passing result with no errors.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// A failing result with a single message.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![message.into()],
        }
    }

    /// Builds a result from a list of messages; empty means valid.
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Localized error messages, in the order the checks ran.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the first error message, if any.
    #[must_use]
    pub fn first_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    /// Combines two results, keeping every error from both.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.errors.extend(other.errors);
        self.is_valid = self.errors.is_empty();
        self
    }
}
