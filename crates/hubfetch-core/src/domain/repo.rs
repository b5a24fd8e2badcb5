//! Repository identifiers and kinds.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Maximum length the Hub accepts for a single identifier segment.
const MAX_SEGMENT_LEN: usize = 96;

/// Reasons a repository identifier or artifact request was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The identifier was empty or whitespace only.
    #[error("Repository id cannot be empty")]
    EmptyRepoId,

    /// The identifier is not of the form `name` or `owner/name`.
    #[error("Repository id '{0}' must be 'name' or 'owner/name'")]
    MalformedRepoId(String),

    /// A segment contains characters or sequences the Hub rejects.
    #[error("Repository id '{id}' has an invalid segment '{segment}'")]
    InvalidSegment {
        /// The full identifier
        id: String,
        /// The offending segment
        segment: String,
    },

    /// The repository kind string is not recognised.
    #[error("Unknown repository type '{0}' (expected model, dataset or space)")]
    UnknownRepoKind(String),

    /// The filename was empty.
    #[error("Filename cannot be empty")]
    EmptyFilename,

    /// The filename is absolute or escapes the repository root.
    #[error("Filename '{0}' must be a relative path inside the repository")]
    InvalidFilename(String),

    /// The revision was empty.
    #[error("Revision cannot be empty")]
    EmptyRevision,
}

/// A validated Hub repository identifier (`owner/name` or a bare `name`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId(pub(crate) String);

impl RepoId {
    /// Parse and validate a repository identifier.
    ///
    /// Surrounding whitespace is trimmed; anything else is taken verbatim.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let id = raw.trim();
        if id.is_empty() {
            return Err(ValidationError::EmptyRepoId);
        }

        let segments: Vec<&str> = id.split('/').collect();
        if segments.len() > 2 || segments.iter().any(|s| s.is_empty()) {
            return Err(ValidationError::MalformedRepoId(id.to_string()));
        }

        for segment in &segments {
            if !is_valid_segment(segment) {
                return Err(ValidationError::InvalidSegment {
                    id: id.to_string(),
                    segment: (*segment).to_string(),
                });
            }
        }

        Ok(Self(id.to_string()))
    }

    /// The identifier as passed to the Hub.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Owner part, if the identifier is namespaced.
    pub fn owner(&self) -> Option<&str> {
        self.0.split_once('/').map(|(owner, _)| owner)
    }

    /// Repository name without the owner.
    pub fn name(&self) -> &str {
        self.0.split_once('/').map_or(&self.0, |(_, name)| name)
    }
}

fn is_valid_segment(segment: &str) -> bool {
    if segment.len() > MAX_SEGMENT_LEN {
        return false;
    }
    if !segment
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
    {
        return false;
    }
    if segment.starts_with(['-', '.']) || segment.ends_with(['-', '.']) {
        return false;
    }
    !segment.contains("--") && !segment.contains("..")
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RepoId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for RepoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kind of Hub repository an artifact lives in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RepoKind {
    #[default]
    Model,
    Dataset,
    Space,
}

impl RepoKind {
    /// Lowercase name as used on the command line and in Hub URLs.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Dataset => "dataset",
            Self::Space => "space",
        }
    }
}

impl fmt::Display for RepoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepoKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "model" | "models" => Ok(Self::Model),
            "dataset" | "datasets" => Ok(Self::Dataset),
            "space" | "spaces" => Ok(Self::Space),
            _ => Err(ValidationError::UnknownRepoKind(s.to_string())),
        }
    }
}
