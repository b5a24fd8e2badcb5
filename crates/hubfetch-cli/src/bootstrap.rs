//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter. The `hf-hub` backed fetcher is instantiated here
//! and handed to handlers as an `ArtifactFetcherPort`.

use std::io::IsTerminal;
use std::sync::Arc;

use hubfetch_core::{ArtifactFetcherPort, CacheDirResolution, resolve_cache_dir};
use hubfetch_hf::{HubClientConfig, HubFetcher};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Where the Hub cache lives and how that was decided.
    pub cache_dir: CacheDirResolution,
    /// Hub endpoint.
    pub endpoint: String,
    /// Access token, if one was given explicitly.
    pub token: Option<String>,
    /// Resolve from the cache only.
    pub offline: bool,
    /// Draw a progress bar on stderr.
    pub progress: bool,
}

impl CliConfig {
    /// Derive the configuration from parsed arguments and the environment.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        Ok(Self {
            cache_dir: resolve_cache_dir(cli.cache_dir.as_deref())?,
            endpoint: cli.endpoint.clone(),
            token: cli.token.clone(),
            offline: cli.offline,
            progress: !cli.no_progress && std::io::stderr().is_terminal(),
        })
    }
}

/// Fully composed application context for the CLI.
pub struct CliContext {
    /// The artifact fetcher.
    pub fetcher: Arc<dyn ArtifactFetcherPort>,
}

/// Wire the fetcher from `config`.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    debug!(
        cache_dir = %config.cache_dir.path.display(),
        source = ?config.cache_dir.source,
        endpoint = %config.endpoint,
        offline = config.offline,
        "Bootstrapping hub client"
    );

    let hub_config = HubClientConfig::new(config.cache_dir.path.clone())
        .with_endpoint(config.endpoint.clone())
        .with_optional_token(config.token.clone())
        .with_progress(config.progress)
        .with_offline(config.offline);

    let fetcher = HubFetcher::new(hub_config)?;
    Ok(CliContext {
        fetcher: Arc::new(fetcher),
    })
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins unless `--verbose` is given, which forces `debug`.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // stdout is reserved for the single result line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .ok();
}
