//! Core type definitions for rainersoft-utils.
//!
//! This crate defines the small set of value types shared by every function
//! group in the workspace:
//! - [`Locale`] tags and the [`Currency`] each one formats with
//! - [`ValidationResult`], the structured pass/fail returned by validators
//! - [`Messages`], the static per-locale translation tables
//!
//! Nothing here holds state. Locale is always passed explicitly; there is no
//! process-wide "current locale".

mod locale;
mod messages;
mod validation;

pub use locale::{Currency, Locale};
pub use messages::{interpolate, Messages};
pub use validation::ValidationResult;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors shared across the workspace.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid hex color: {0}")]
    InvalidHexColor(String),

    #[error("unknown locale: {0}")]
    UnknownLocale(String),

    #[error("unknown status code: {0}")]
    UnknownStatus(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
