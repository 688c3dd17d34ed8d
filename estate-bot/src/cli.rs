//! CLI parser.

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "estate-bot")]
#[command(about = "Housing-search Telegram bot: run, one-shot search, init-db", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Run one search for the given request and print the outcome.
    Search {
        /// Free-text request, e.g. "2 bed apartment in Dubai Marina, 4 to 7 million".
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
    /// Create the listing tables in DATABASE_URL if they do not exist.
    InitDb,
}
