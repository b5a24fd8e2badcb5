//! Download handler.
//!
//! Builds the artifact request from the arguments, fetches it through the
//! port and prints the single `Downloaded to:` line.

use std::io::Write;

use hubfetch_core::{ArtifactFetcherPort, ArtifactRequest, FetchedArtifact};
use tracing::info;

use crate::error::CliError;
use crate::parser::Cli;

/// Build the artifact request described by the arguments.
pub fn build_request(cli: &Cli) -> Result<ArtifactRequest, CliError> {
    let request = ArtifactRequest::new(cli.repo.clone(), cli.filename.as_str())?
        .with_kind(cli.repo_type)
        .with_revision(cli.revision.as_str())?;
    Ok(request)
}

/// Fetch `request` and write `Downloaded to: <path>` to `out`.
///
/// Nothing is written unless the fetch succeeded.
pub async fn execute<W: Write>(
    fetcher: &dyn ArtifactFetcherPort,
    request: &ArtifactRequest,
    out: &mut W,
) -> Result<FetchedArtifact, CliError> {
    let fetched = fetcher.fetch(request).await?;

    if fetched.from_cache {
        info!(path = %fetched.path.display(), "Using cached copy");
    }

    writeln!(out, "Downloaded to: {}", fetched.path.display())?;
    out.flush()?;
    Ok(fetched)
}
