#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    ArtifactRequest, DEFAULT_FILENAME, DEFAULT_REPO_ID, DEFAULT_REVISION, FetchedArtifact,
    RepoId, RepoKind, ValidationError,
};
pub use paths::{CacheDirResolution, CacheDirSource, PathError, resolve_cache_dir};
pub use ports::{ArtifactFetcherPort, FetchError, FetchResult};

#[cfg(any(test, feature = "test-utils"))]
pub use ports::MockArtifactFetcherPort;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio as _;
