//! estate-bot CLI: run the Telegram bot, run a one-shot search, or create the listing tables.

use anyhow::Result;
use clap::Parser;
use criteria_extractor::EnvLlmConfig;
use estate_bot::components::{build_orchestrator, build_store};
use estate_bot::conversation::render::format_property_info;
use estate_bot::{run_bot, BotConfig, Cli, Commands, StdoutNotifier};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = BotConfig::load(token)?;
            run_bot(config).await
        }
        Commands::Search { query } => handle_search(query.join(" ")).await,
        Commands::InitDb => handle_init_db().await,
    }
}

fn init_console_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .try_init();
}

/// Runs one request through extraction and the relaxation steps and prints the outcome.
async fn handle_search(query: String) -> Result<()> {
    init_console_tracing();
    let config = BotConfig::load(None)?;
    let llm = EnvLlmConfig::from_env()?;
    let store = build_store(&config)?;
    let orchestrator = build_orchestrator(&config, &llm, store);

    let outcome = orchestrator.process_query(&query, &StdoutNotifier).await?;

    println!("[{}] {}", outcome.status, outcome.message);
    for group in outcome.results.groups() {
        println!("\n{} ({})", group.building, group.records.len());
        for record in &group.records {
            println!("  {}", format_property_info(record));
        }
    }
    Ok(())
}

/// Creates the listing schema in DATABASE_URL.
async fn handle_init_db() -> Result<()> {
    init_console_tracing();
    let config = BotConfig::load(None)?;
    let store = build_store(&config)?;
    store.migrate().await?;
    println!("Listing tables ready at {}", config.database_url);
    Ok(())
}
