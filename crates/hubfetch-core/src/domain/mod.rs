//! Domain types for hub artifact requests.
//!
//! These types are pure data with validation. They know nothing about the
//! client library that eventually performs the download.

mod artifact;
mod repo;

pub use artifact::{
    ArtifactRequest, DEFAULT_FILENAME, DEFAULT_REPO_ID, DEFAULT_REVISION, FetchedArtifact,
};
pub use repo::{RepoId, RepoKind, ValidationError};
