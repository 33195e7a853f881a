//! CLI-specific error types with exit codes.
//!
//! This module defines error types specific to the CLI layer,
//! wrapping library errors and providing appropriate exit codes.

use iniparse::Error as LibError;
use std::fmt;

/// CLI-specific error type with exit code mapping.
#[derive(Debug)]
pub enum CliError {
    /// Library error (wrapped).
    Library(LibError),

    /// Command-line flags that produce invalid parser options.
    InvalidArguments(String),

    /// No input file or stream was given.
    NoSource,

    /// Parser options error.
    Config(String),

    /// Semantic failure (e.g., section not found) - exit code 1.
    SemanticFailure(String),
}

impl CliError {
    /// Get the appropriate exit code for this error.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: Semantic failure (e.g., section or option not found)
    /// - 3: No input source
    /// - 4: Invalid arguments
    /// - 5: Input could not be opened or read
    /// - 6: Other library error
    /// - 7: Parser options error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::SemanticFailure(_) => 1,
            CliError::Library(lib_err) => match lib_err {
                LibError::Io(_) | LibError::InvalidPath { .. } => 5,
                _ => 6,
            },
            CliError::NoSource => 3,
            CliError::InvalidArguments(_) => 4,
            CliError::Config(_) => 7,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Library(e) => write!(f, "{e}"),
            CliError::InvalidArguments(msg) => write!(f, "Invalid arguments: {msg}"),
            CliError::NoSource => {
                write!(f, "No input specified (pass a file path, or - for stdin)")
            }
            CliError::Config(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SemanticFailure(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Library(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LibError> for CliError {
    fn from(e: LibError) -> Self {
        // Check for specific error types that need special handling
        match e {
            LibError::NoSource => CliError::NoSource,
            LibError::Validation { .. } => CliError::Config(e.to_string()),
            _ => CliError::Library(e),
        }
    }
}
