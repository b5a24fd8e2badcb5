//! Artifact fetcher port.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{ArtifactRequest, FetchedArtifact, ValidationError};

/// Errors from artifact fetch operations.
///
/// These are domain-level errors that consumers can handle.
/// Client-library errors are mapped to these with their message preserved.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request itself was invalid.
    #[error("Invalid request: {message}")]
    InvalidRequest {
        /// What was wrong with the request
        message: String,
    },

    /// Offline mode was requested and the file is not in the local cache.
    #[error("'{filename}' from '{repo_id}' is not in the local cache and offline mode is enabled")]
    NotCached {
        /// Repository that was requested
        repo_id: String,
        /// File that was requested
        filename: String,
    },

    /// The hub client failed; its message is kept verbatim.
    #[error("Failed to download '{filename}' from '{repo_id}': {message}")]
    Client {
        /// Repository that was requested
        repo_id: String,
        /// File that was requested
        filename: String,
        /// Error reported by the client
        message: String,
    },

    /// The client could not be constructed.
    #[error("Configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

impl From<ValidationError> for FetchError {
    fn from(err: ValidationError) -> Self {
        Self::InvalidRequest {
            message: err.to_string(),
        }
    }
}

/// Result type alias for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Port trait for fetching a single artifact from a hub.
///
/// The implementation owns caching, authentication and transfer. Callers
/// only see the local path it hands back.
#[cfg_attr(any(test, feature = "test-utils"), mockall::automock)]
#[async_trait]
pub trait ArtifactFetcherPort: Send + Sync {
    /// Fetch `request.filename` and return where it was stored locally.
    async fn fetch(&self, request: &ArtifactRequest) -> FetchResult<FetchedArtifact>;
}
