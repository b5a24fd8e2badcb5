//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and its mapping
//! to exit codes.

use hubfetch_core::{FetchError, PathError, ValidationError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid request built from the arguments.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// The hub client failed.
    #[error("{0}")]
    Download(String),

    /// Offline mode and the file is not cached.
    #[error("{0}")]
    NotCached(String),

    /// IO error (writing to stdout).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Download(_) => 1,
            Self::Arguments(_) => 2,  // EX_USAGE
            Self::NotCached(_) => 66, // EX_NOINPUT
            Self::Io(_) => 74,        // EX_IOERR
            Self::Config(_) => 78,    // EX_CONFIG
        }
    }
}

impl From<FetchError> for CliError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::InvalidRequest { message } => Self::Arguments(message),
            err @ FetchError::NotCached { .. } => Self::NotCached(err.to_string()),
            err @ FetchError::Client { .. } => Self::Download(err.to_string()),
            FetchError::Configuration { message } => Self::Config(message),
        }
    }
}

impl From<ValidationError> for CliError {
    fn from(err: ValidationError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
