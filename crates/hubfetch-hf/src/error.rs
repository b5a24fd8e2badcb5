//! Internal error types for Hub operations.
//!
//! These errors are internal to `hubfetch-hf` and are mapped to core port
//! errors at the boundary.

use hf_hub::api::tokio::ApiError;
use hubfetch_core::{ArtifactRequest, FetchError};
use thiserror::Error;

/// Result type alias for Hub operations.
pub(crate) type HubResult<T> = Result<T, HubError>;

/// Errors related to Hub client operations.
#[derive(Debug, Error)]
pub(crate) enum HubError {
    /// The `hf-hub` client failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// The configured endpoint does not parse.
    #[error("Invalid endpoint URL '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// The configured endpoint is not http(s).
    #[error("Unsupported endpoint scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

impl HubError {
    /// Map to the core port error for `request`.
    pub(crate) fn into_fetch_error(self, request: &ArtifactRequest) -> FetchError {
        match self {
            Self::Api(source) => FetchError::Client {
                repo_id: request.repo.to_string(),
                filename: request.filename.clone(),
                message: source.to_string(),
            },
            err @ (Self::InvalidEndpoint { .. } | Self::UnsupportedScheme(_)) => {
                FetchError::Configuration {
                    message: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_maps_to_configuration() {
        let source = url::Url::parse("not a url").unwrap_err();
        let err = HubError::InvalidEndpoint {
            endpoint: "not a url".to_string(),
            source,
        };
        let mapped = err.into_fetch_error(&ArtifactRequest::default_artifact());
        assert!(matches!(mapped, FetchError::Configuration { .. }));
        assert!(mapped.to_string().contains("not a url"));
    }

    #[test]
    fn test_unsupported_scheme_message() {
        let err = HubError::UnsupportedScheme("ftp".to_string());
        assert!(err.to_string().contains("ftp"));
    }
}
