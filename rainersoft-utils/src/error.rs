//! Error types for configuration loading.

use thiserror::Error;

/// Result type for facade operations.
pub type UtilsResult<T> = Result<T, UtilsError>;

#[derive(Debug, Error)]
pub enum UtilsError {
    /// IO error reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse or validation failure from the shared types.
    #[error(transparent)]
    Types(#[from] rainersoft_types::Error),
}
