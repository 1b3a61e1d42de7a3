//! Error types for the space picker engine.
//!
//! This module defines the centralized error type [`PickerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Note that *validation* failures are not errors in this taxonomy: validators
//! return [`ValidationErrors`](crate::validation::ValidationErrors) maps and never
//! an `Err`. `PickerError` covers operational and configuration failures only.

use thiserror::Error;

/// The main error type for space picker operations.
///
/// This enum consolidates the error conditions that can occur while driving the
/// picker engine: configuration loading problems, I/O failures while reading a
/// config file, and operational failures reported by the external storage client.
///
/// # Examples
///
/// ```
/// use spacepicker::domain::PickerError;
///
/// fn load_defaults() -> Result<(), PickerError> {
///     Err(PickerError::Config("missing required field".to_string()))
/// }
///
/// assert!(load_defaults().is_err());
/// ```
#[derive(Debug, Error)]
pub enum PickerError {
    /// An operation against the external storage client failed.
    ///
    /// The engine never calls the client itself; the embedding runtime reports
    /// failed create/set-current calls through this variant. The string contains
    /// the client's description of what went wrong.
    #[error("Client error: {0}")]
    Client(String),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or contains malformed
    /// values. The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations (reading a config
    /// file). Automatically converts from `std::io::Error` using the `#[from]`
    /// attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for space picker operations.
///
/// This is a type alias for `std::result::Result<T, PickerError>` that simplifies
/// function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use spacepicker::domain::Result;
///
/// fn noop() -> Result<()> {
///     Ok(())
/// }
/// ```
pub type Result<T> = std::result::Result<T, PickerError>;
