//! Hub cache directory resolution.
//!
//! Follows the same precedence as the official Hub clients so files cached
//! by other tools are found and reused.

use std::env;
use std::path::PathBuf;

use tracing::debug;

use super::error::PathError;
use super::platform::normalize_user_path;

/// Default cache location relative to the user's home directory.
pub const DEFAULT_CACHE_DIR_RELATIVE: &str = ".cache/huggingface/hub";

/// Environment variable naming the hub cache directory directly.
pub const ENV_HF_HUB_CACHE: &str = "HF_HUB_CACHE";

/// Environment variable naming the Hugging Face home; the cache is `$HF_HOME/hub`.
pub const ENV_HF_HOME: &str = "HF_HOME";

/// How the cache directory was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheDirSource {
    /// The user passed an explicit path (`--cache-dir`).
    Explicit,
    /// From `HF_HUB_CACHE`.
    HubCacheEnv,
    /// From `HF_HOME`.
    HfHomeEnv,
    /// Fallback default (`~/.cache/huggingface/hub`).
    Default,
}

/// Resolution result for the cache directory.
#[derive(Debug, Clone)]
pub struct CacheDirResolution {
    /// The resolved path to the cache directory.
    pub path: PathBuf,
    /// How the path was determined.
    pub source: CacheDirSource,
}

/// Return the default hub cache directory.
pub fn default_cache_dir() -> Result<PathBuf, PathError> {
    let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
    Ok(home.join(DEFAULT_CACHE_DIR_RELATIVE))
}

/// Resolve the cache directory from the process environment.
///
/// Resolution order:
/// 1. Explicit path provided by caller (highest priority)
/// 2. `HF_HUB_CACHE`
/// 3. `HF_HOME` joined with `hub`
/// 4. `~/.cache/huggingface/hub`
pub fn resolve_cache_dir(explicit: Option<&str>) -> Result<CacheDirResolution, PathError> {
    resolve_cache_dir_with(explicit, |key| env::var(key).ok())
}

/// Resolve the cache directory using `lookup` for environment values.
pub fn resolve_cache_dir_with<F>(
    explicit: Option<&str>,
    lookup: F,
) -> Result<CacheDirResolution, PathError>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    let resolution = if let Some(path_str) = explicit.filter(|p| !p.trim().is_empty()) {
        CacheDirResolution {
            path: normalize_user_path(path_str)?,
            source: CacheDirSource::Explicit,
        }
    } else if let Some(hub_cache) = non_blank(ENV_HF_HUB_CACHE) {
        CacheDirResolution {
            path: normalize_user_path(&hub_cache)?,
            source: CacheDirSource::HubCacheEnv,
        }
    } else if let Some(hf_home) = non_blank(ENV_HF_HOME) {
        CacheDirResolution {
            path: normalize_user_path(&hf_home)?.join("hub"),
            source: CacheDirSource::HfHomeEnv,
        }
    } else {
        CacheDirResolution {
            path: default_cache_dir()?,
            source: CacheDirSource::Default,
        }
    };

    debug!(
        path = %resolution.path.display(),
        source = ?resolution.source,
        "Resolved hub cache directory"
    );
    Ok(resolution)
}
