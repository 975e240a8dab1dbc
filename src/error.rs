//! Error types for the late deduction engine.
//!
//! The deduction calculations themselves never fail; malformed inputs degrade
//! to zero contributions. Errors only arise at the edges, when settings are
//! loaded from disk or validated before being handed to the engine.

use thiserror::Error;

/// The main error type for the late deduction engine.
///
/// # Example
///
/// ```
/// use late_deduction_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/settings.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/settings.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration file has an extension the loader does not understand.
    #[error("Unsupported configuration format: {path}")]
    UnsupportedConfigFormat {
        /// The offending path.
        path: String,
    },

    /// A deduction policy failed validation.
    #[error("Invalid settings field '{field}': {message}")]
    InvalidSettings {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
