use clap::Parser;
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use ballot_cli::application::{dispatch, ActionContext, LinePrompter};
use ballot_cli::cli::Cli;
use ballot_cli::config::Config;
use ballot_cli::domain::{ActionOutcome, BallotError};
use ballot_cli::infrastructure::contracts::BallotClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file
    dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Usage errors exit 1 like every other failure; help and version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(cli).await {
        Ok(outcome) => {
            debug!(?outcome, "action finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ActionOutcome, BallotError> {
    let (action, params) = cli.command.into_parts();

    let config = Config::from_env()?;
    let client = BallotClient::new(
        config.network.clone(),
        config.receipt_policy,
        config.artifact_path.clone(),
    )?;

    // Released when `run` returns, whatever the outcome
    let mut prompter = LinePrompter::stdio();

    let mut ctx = ActionContext {
        config: &config,
        gateway: &client,
        prompter: &mut prompter,
    };
    dispatch(action, &mut ctx, &params).await
}
