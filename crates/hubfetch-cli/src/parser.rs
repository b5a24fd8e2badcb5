//! Main CLI parser.
//!
//! There are no subcommands: every flag has a default, so a bare
//! `hubfetch` fetches the default artifact.

use clap::Parser;
use clap::builder::BoolishValueParser;
use hubfetch_core::{DEFAULT_FILENAME, DEFAULT_REPO_ID, DEFAULT_REVISION, RepoId, RepoKind};
use hubfetch_hf::DEFAULT_ENDPOINT;

/// Download one file from the Hugging Face Hub and print its local path.
#[derive(Debug, Parser)]
#[command(name = "hubfetch")]
#[command(about = "Download a file from the Hugging Face Hub and print where it was cached")]
#[command(version)]
pub struct Cli {
    /// Repository id (`owner/name`)
    #[arg(long, value_name = "ID", default_value = DEFAULT_REPO_ID)]
    pub repo: RepoId,

    /// File to fetch, relative to the repository root
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FILENAME)]
    pub filename: String,

    /// Branch, tag or commit
    #[arg(long, value_name = "REV", default_value = DEFAULT_REVISION)]
    pub revision: String,

    /// Kind of repository: model, dataset or space
    #[arg(long = "repo-type", value_name = "TYPE", default_value = "model")]
    pub repo_type: RepoKind,

    /// Override the Hub cache directory for this invocation
    #[arg(long = "cache-dir", value_name = "DIR", env = "HUBFETCH_CACHE_DIR")]
    pub cache_dir: Option<String>,

    /// Access token for gated or private repositories
    #[arg(long, env = "HF_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Hub endpoint (e.g. a mirror)
    #[arg(long, value_name = "URL", env = "HF_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Only use files already in the local cache
    #[arg(long, env = "HF_HUB_OFFLINE", value_parser = BoolishValueParser::new())]
    pub offline: bool,

    /// Never draw a progress bar
    #[arg(long = "no-progress")]
    pub no_progress: bool,

    /// Enable verbose/debug output on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bare_invocation_uses_defaults() {
        let cli = Cli::try_parse_from(["hubfetch"]).unwrap();
        assert_eq!(cli.repo.as_str(), "a8nova/gemma-2b-it-gpu-int8");
        assert_eq!(cli.filename, "gemma-2b-it-gpu-int8.bin");
        assert_eq!(cli.revision, "main");
        assert_eq!(cli.repo_type, RepoKind::Model);
        assert!(!cli.no_progress);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from([
            "hubfetch",
            "--repo",
            "org/corpus",
            "--filename",
            "data/train.jsonl",
            "--revision",
            "v1",
            "--repo-type",
            "dataset",
            "--cache-dir",
            "/tmp/hub",
            "--endpoint",
            "https://mirror.example.com",
            "--offline",
            "--no-progress",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.repo.as_str(), "org/corpus");
        assert_eq!(cli.filename, "data/train.jsonl");
        assert_eq!(cli.revision, "v1");
        assert_eq!(cli.repo_type, RepoKind::Dataset);
        assert_eq!(cli.cache_dir.as_deref(), Some("/tmp/hub"));
        assert_eq!(cli.endpoint, "https://mirror.example.com");
        assert!(cli.offline);
        assert!(cli.no_progress);
        assert!(cli.verbose);
    }

    #[test]
    fn test_invalid_repo_id_is_usage_error() {
        let err = Cli::try_parse_from(["hubfetch", "--repo", "not/a/repo"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_unknown_repo_type_is_rejected() {
        assert!(Cli::try_parse_from(["hubfetch", "--repo-type", "weights"]).is_err());
    }
}
