//! Artifact requests and fetch results.

use std::path::{Component, Path, PathBuf};

use super::repo::{RepoId, RepoKind, ValidationError};

/// Repository fetched when no `--repo` is given.
pub const DEFAULT_REPO_ID: &str = "a8nova/gemma-2b-it-gpu-int8";

/// Artifact fetched when no `--filename` is given.
pub const DEFAULT_FILENAME: &str = "gemma-2b-it-gpu-int8.bin";

/// Branch fetched when no `--revision` is given.
pub const DEFAULT_REVISION: &str = "main";

/// A single file to fetch from a Hub repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRequest {
    /// Repository holding the file.
    pub repo: RepoId,
    /// Kind of repository.
    pub kind: RepoKind,
    /// Path of the file relative to the repository root.
    pub filename: String,
    /// Branch, tag or commit.
    pub revision: String,
}

impl ArtifactRequest {
    /// Create a request for `filename` in a model repository at `main`.
    pub fn new(repo: RepoId, filename: impl Into<String>) -> Result<Self, ValidationError> {
        let filename = validate_filename(&filename.into())?;
        Ok(Self {
            repo,
            kind: RepoKind::Model,
            filename,
            revision: DEFAULT_REVISION.to_string(),
        })
    }

    /// The fixed gemma artifact fetched by a bare `hubfetch` invocation.
    pub fn default_artifact() -> Self {
        Self {
            repo: RepoId(DEFAULT_REPO_ID.to_string()),
            kind: RepoKind::Model,
            filename: DEFAULT_FILENAME.to_string(),
            revision: DEFAULT_REVISION.to_string(),
        }
    }

    /// Set the repository kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: RepoKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the revision to fetch.
    pub fn with_revision(mut self, revision: impl Into<String>) -> Result<Self, ValidationError> {
        let revision = revision.into();
        let trimmed = revision.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyRevision);
        }
        self.revision = trimmed.to_string();
        Ok(self)
    }
}

fn validate_filename(raw: &str) -> Result<String, ValidationError> {
    let filename = raw.trim();
    if filename.is_empty() {
        return Err(ValidationError::EmptyFilename);
    }

    // Hub paths always use '/', even on Windows
    if filename.starts_with('/') || filename.starts_with('\\') {
        return Err(ValidationError::InvalidFilename(filename.to_string()));
    }

    let escapes = Path::new(filename).components().any(|c| {
        matches!(
            c,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    });
    if escapes || filename.split('/').any(|s| s == "..") {
        return Err(ValidationError::InvalidFilename(filename.to_string()));
    }

    Ok(filename.to_string())
}

/// Local result of a successful fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedArtifact {
    /// Where the client placed the file.
    pub path: PathBuf,
    /// Whether the file was already present in the local cache.
    pub from_cache: bool,
}
