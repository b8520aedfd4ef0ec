//! Marquee CLI - Command-line interface
//!
//! Terminal front end for the movie search orchestrator.

mod commands;
mod shell;

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use marquee_core::{CliLogLevel, MarqueeConfig, MarqueeError, init_tracing};
use marquee_search::SearchError;

#[derive(Parser)]
#[command(name = "marquee")]
#[command(about = "Search movies across OMDb, the web and IMDb")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: commands::Commands,

    /// Backend base URL (overrides MARQUEE_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds; no timeout when unset
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Console log level
    #[arg(long, global = true, value_enum, default_value = "warn")]
    log_level: CliLogLevel,
}

impl Cli {
    /// Flags take precedence over the environment, which beats defaults.
    fn config(&self) -> anyhow::Result<MarqueeConfig> {
        let mut config = MarqueeConfig::from_env();
        if let Some(base_url) = &self.base_url {
            config = config.with_base_url(base_url.trim());
        }
        if let Some(seconds) = self.timeout {
            config.api.request_timeout = Some(Duration::from_secs(seconds));
        }
        config.validate()?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!("Command failed: {:?}", error);
            eprintln!("Error: {}", describe(&error));
            ExitCode::from(exit_status(&error))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let log_path = init_tracing(cli.log_level.as_tracing_level(), None)?;
    tracing::debug!("Writing trace log to {}", log_path.display());

    let config = cli.config()?;
    commands::handle_command(cli.command, config).await
}

/// Message shown for a failed command.
fn describe(error: &anyhow::Error) -> String {
    match error.downcast_ref::<MarqueeError>() {
        Some(core) => core.user_message(),
        None => format!("{error:#}"),
    }
}

/// 2 for bad settings or input, 1 for everything else.
fn exit_status(error: &anyhow::Error) -> u8 {
    let user_error = error
        .downcast_ref::<MarqueeError>()
        .is_some_and(MarqueeError::is_user_error)
        || error
            .downcast_ref::<SearchError>()
            .is_some_and(SearchError::is_validation);

    if user_error { 2 } else { 1 }
}
