//! `hf-hub` backed implementation of `ArtifactFetcherPort`.

use async_trait::async_trait;
use hf_hub::api::tokio::{Api, ApiBuilder};
use hf_hub::{Cache, Repo, RepoType};
use hubfetch_core::{
    ArtifactFetcherPort, ArtifactRequest, FetchError, FetchResult, FetchedArtifact, RepoKind,
};
use tracing::{debug, info};
use url::Url;

use crate::config::HubClientConfig;
use crate::error::{HubError, HubResult};

/// Fetches single files from the Hugging Face Hub into the shared cache.
///
/// Each fetch is one `ApiRepo::get` call. `hf-hub` returns early when the
/// file is already cached, otherwise it downloads, verifies and links it
/// into the snapshot directory.
#[derive(Debug, Clone)]
pub struct HubFetcher {
    config: HubClientConfig,
    cache: Cache,
}

impl HubFetcher {
    /// Create a fetcher, validating the endpoint up front.
    pub fn new(config: HubClientConfig) -> FetchResult<Self> {
        validate_endpoint(&config.endpoint).map_err(|e| FetchError::Configuration {
            message: e.to_string(),
        })?;
        let cache = Cache::new(config.cache_dir.clone());
        Ok(Self { config, cache })
    }

    /// Look up `request` in the local cache without touching the network.
    pub fn cached_path(&self, request: &ArtifactRequest) -> Option<std::path::PathBuf> {
        self.cache.repo(to_hf_repo(request)).get(&request.filename)
    }

    fn build_api(&self) -> HubResult<Api> {
        let mut builder = ApiBuilder::new()
            .with_cache_dir(self.config.cache_dir.clone())
            .with_endpoint(self.config.endpoint.clone())
            .with_progress(self.config.progress);

        let (agent, version) = split_user_agent(&self.config.user_agent);
        builder = builder.with_user_agent(agent, version);

        // Leave hf-hub's own token file in effect unless one was given
        if self.config.token.is_some() {
            builder = builder.with_token(self.config.token.clone());
        }

        Ok(builder.build()?)
    }

    async fn download(&self, request: &ArtifactRequest) -> HubResult<std::path::PathBuf> {
        let api = self.build_api()?;
        let path = api.repo(to_hf_repo(request)).get(&request.filename).await?;
        Ok(path)
    }
}

#[async_trait]
impl ArtifactFetcherPort for HubFetcher {
    async fn fetch(&self, request: &ArtifactRequest) -> FetchResult<FetchedArtifact> {
        let cached = self.cached_path(request);

        if self.config.offline {
            debug!(repo = %request.repo, file = %request.filename, "Offline lookup");
            return cached
                .map(|path| FetchedArtifact {
                    path,
                    from_cache: true,
                })
                .ok_or_else(|| FetchError::NotCached {
                    repo_id: request.repo.to_string(),
                    filename: request.filename.clone(),
                });
        }

        info!(
            owner = request.repo.owner().unwrap_or("-"),
            name = request.repo.name(),
            kind = %request.kind,
            revision = %request.revision,
            file = %request.filename,
            endpoint = %self.config.endpoint,
            "Fetching artifact"
        );

        let from_cache = cached.is_some();
        let path = self
            .download(request)
            .await
            .map_err(|e| e.into_fetch_error(request))?;

        debug!(path = %path.display(), from_cache, "Artifact available");
        Ok(FetchedArtifact { path, from_cache })
    }
}

fn to_hf_repo(request: &ArtifactRequest) -> Repo {
    let repo_type = match request.kind {
        RepoKind::Model => RepoType::Model,
        RepoKind::Dataset => RepoType::Dataset,
        RepoKind::Space => RepoType::Space,
    };
    Repo::with_revision(
        request.repo.to_string(),
        repo_type,
        request.revision.clone(),
    )
}

/// Split `name/version` into the key and value `hf-hub` expects.
fn split_user_agent(user_agent: &str) -> (&str, &str) {
    user_agent.split_once('/').unwrap_or((user_agent, ""))
}

fn validate_endpoint(endpoint: &str) -> HubResult<()> {
    let url = Url::parse(endpoint).map_err(|source| HubError::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        source,
    })?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(HubError::UnsupportedScheme(other.to_string())),
    }
}
