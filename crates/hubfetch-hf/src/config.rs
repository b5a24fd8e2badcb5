//! Public configuration for the Hub client.
//!
//! This module provides a stable public API for configuring the fetcher.
//! The `hf-hub` builder is derived from it when a request is made.

use std::path::PathBuf;

/// Hub endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://huggingface.co";

/// Configuration for the Hub fetcher.
///
/// Use the builder pattern methods to customize the configuration.
///
/// # Example
///
/// ```
/// use hubfetch_hf::HubClientConfig;
///
/// let config = HubClientConfig::new("/tmp/hub-cache")
///     .with_endpoint("https://hf-mirror.example.com")
///     .with_progress(true);
/// ```
#[derive(Debug, Clone)]
pub struct HubClientConfig {
    /// Base URL of the Hub
    pub(crate) endpoint: String,
    /// Cache directory shared with other Hub clients
    pub(crate) cache_dir: PathBuf,
    /// Optional authentication token for gated or private repos
    pub(crate) token: Option<String>,
    /// Draw a progress bar on stderr while downloading
    pub(crate) progress: bool,
    /// Resolve from the local cache only
    pub(crate) offline: bool,
    /// User agent sent with Hub requests, as `name/version`
    pub(crate) user_agent: String,
}

impl HubClientConfig {
    /// Create a configuration that caches into `cache_dir`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            cache_dir: cache_dir.into(),
            token: None,
            progress: false,
            offline: false,
            user_agent: concat!("hubfetch/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Set the Hub endpoint.
    ///
    /// Defaults to `https://huggingface.co`. A trailing slash is dropped.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Set an authentication token for gated or private repositories.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set an optional authentication token.
    ///
    /// `None` keeps whatever token `hf-hub` finds in its own token file.
    #[must_use]
    pub fn with_optional_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Enable or disable the download progress bar.
    #[must_use]
    pub const fn with_progress(mut self, progress: bool) -> Self {
        self.progress = progress;
        self
    }

    /// Resolve from the local cache only, never touching the network.
    #[must_use]
    pub const fn with_offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Set the user agent sent with Hub requests (`name/version`).
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The cache directory this configuration points at.
    pub fn cache_dir(&self) -> &std::path::Path {
        &self.cache_dir
    }
}
