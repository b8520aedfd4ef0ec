//! CLI command implementations

use std::sync::Arc;

use anyhow::{Context, bail};
use clap::Subcommand;
use marquee_core::MarqueeConfig;
use marquee_search::{
    HttpTransport, Provider, Query, QueryOrchestrator, RequestState, SearchError, check_health,
    providers,
};
use marquee_web::presenter::{LOADING_TEXT, render};

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Run a single search and print the result
    Search {
        /// Provider to query (omdb, serper, imdb)
        #[arg(short, long, default_value = "omdb")]
        provider: Provider,
        /// Release year filter; ignored for web search
        #[arg(short, long)]
        year: Option<String>,
        /// Movie title or search terms
        #[arg(required = true, trailing_var_arg = true)]
        query: Vec<String>,
    },
    /// List the available providers
    Providers,
    /// Interactive search session
    Shell {
        /// Provider selected at start
        #[arg(short, long, default_value = "omdb")]
        provider: Provider,
    },
    /// Start the web front end
    Server {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to bind to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Check that the backend is reachable
    Health,
}

/// Handle the CLI command
///
/// # Errors
/// Returns the failure of whichever command was run. A search that ends in
/// the failed state is reported as an error so the exit status is non-zero.
pub async fn handle_command(command: Commands, config: MarqueeConfig) -> anyhow::Result<()> {
    match command {
        Commands::Search {
            provider,
            year,
            query,
        } => search(&config, provider, &query.join(" "), year.as_deref()).await,
        Commands::Providers => {
            list_providers();
            Ok(())
        }
        Commands::Shell { provider } => {
            let orchestrator = orchestrator(&config)?;
            orchestrator.select_provider(provider);
            crate::shell::run(&orchestrator).await
        }
        Commands::Server { host, port } => start_server(config, host, port).await,
        Commands::Health => health(&config).await,
    }
}

pub fn orchestrator(config: &MarqueeConfig) -> anyhow::Result<QueryOrchestrator> {
    let transport = HttpTransport::new(&config.api)
        .with_context(|| format!("cannot use backend at {}", config.api.base_url))?;
    Ok(QueryOrchestrator::new(Arc::new(transport)))
}

async fn search(
    config: &MarqueeConfig,
    provider: Provider,
    text: &str,
    raw_year: Option<&str>,
) -> anyhow::Result<()> {
    let orchestrator = orchestrator(config)?;
    let Some(query) = collect_query(text, raw_year, provider)? else {
        // Nothing to submit; show the untouched state instead of an error.
        println!("{}", render(&orchestrator.state(), provider));
        return Ok(());
    };

    println!("{LOADING_TEXT}");
    let Some(state) = orchestrator.submit(provider, &query).await else {
        return Ok(());
    };

    if let RequestState::Failed(message) = &state {
        bail!("{message}");
    }
    print!("{}", render(&state, provider));
    Ok(())
}

/// Parses command-line input into a query, or `None` when the text is blank.
///
/// # Errors
/// - `SearchError::MalformedYear` / `SearchError::InvalidYear` - Bad year for a provider that uses one
pub fn collect_query(
    text: &str,
    raw_year: Option<&str>,
    provider: Provider,
) -> Result<Option<Query>, SearchError> {
    let query = Query::from_input(text, raw_year, provider)?;
    Ok((!query.is_blank()).then_some(query))
}

pub fn list_providers() {
    println!("Providers");
    println!("{:-<40}", "");
    for info in providers() {
        let year = if info.accepts_year {
            "year filter"
        } else {
            "no year filter"
        };
        println!("{:<8} {:<12} {}", info.provider.id(), info.label, year);
    }
}

async fn start_server(
    mut config: MarqueeConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        config.web.host = host;
    }
    if let Some(port) = port {
        config.web.port = port;
    }

    println!("Starting Marquee on http://{}", config.web_bind_address());
    println!("  Backend: {}", config.api.base_url);
    marquee_web::run_server(&config).await?;
    Ok(())
}

async fn health(config: &MarqueeConfig) -> anyhow::Result<()> {
    let transport = HttpTransport::new(&config.api)?;
    let status = check_health(&transport)
        .await
        .with_context(|| format!("backend at {} is unreachable", config.api.base_url))?;

    match &status.message {
        Some(message) => println!("{}: {} ({message})", config.api.base_url, status.status),
        None => println!("{}: {}", config.api.base_url, status.status),
    }

    if !status.is_ok() {
        bail!("backend reported status '{}'", status.status);
    }
    Ok(())
}
