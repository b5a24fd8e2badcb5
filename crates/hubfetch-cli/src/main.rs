//! CLI entry point.
//!
//! Parses arguments, wires the fetcher via bootstrap and runs the single
//! download. Errors are reported on stderr and mapped to exit codes.

use std::process::ExitCode;

use clap::Parser;

use hubfetch_cli::{Cli, CliConfig, CliError, bootstrap, handlers, init_logging};

async fn run(cli: Cli) -> Result<(), CliError> {
    let request = handlers::download::build_request(&cli)?;
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(&config)?;

    let mut stdout = std::io::stdout().lock();
    handlers::download::execute(ctx.fetcher.as_ref(), &request, &mut stdout).await?;
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load environment variables before clap reads env-backed flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
