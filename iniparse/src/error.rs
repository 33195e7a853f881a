//! Error types for the iniparse library.
//!
//! Parsing is deliberately permissive: malformed lines are skipped and
//! unrecognised tokens fall back to strings. The only parse-time failure a
//! caller has to handle is a missing line source ([`Error::NoSource`]); the
//! remaining variants cover the surrounding plumbing (I/O, options, output).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with an iniparse error.
///
/// # Examples
///
/// ```
/// use iniparse::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the iniparse library.
#[derive(Debug, Error)]
pub enum Error {
    /// No line source was supplied, neither at construction nor at call time.
    #[error("no line source was specified")]
    NoSource,

    /// Reading from the line source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A file could not be opened or read.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The path that could not be used.
        path: PathBuf,
        /// The reason the path could not be used.
        reason: String,
    },

    /// Parser options failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The option that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A line pattern could not be compiled.
    #[error("pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// The configuration could not be projected into the requested record type.
    #[error("projection error: {0}")]
    Projection(#[from] serde_json::Error),

    /// An output formatter failed to render the configuration.
    #[error("failed to serialize to {format}: {message}")]
    Serialization {
        /// The output format being produced.
        format: String,
        /// Details from the underlying serializer.
        message: String,
    },
}

impl Error {
    /// Check if the error means no line source was available.
    ///
    /// # Examples
    ///
    /// ```
    /// use iniparse::Error;
    ///
    /// assert!(Error::NoSource.is_no_source());
    /// ```
    #[must_use]
    pub fn is_no_source(&self) -> bool {
        matches!(self, Self::NoSource)
    }
}
