use std::sync::Arc;

use anyhow::Result;
use criteria_extractor::EnvLlmConfig;
use estate_core::{init_tracing, Bot};
use tracing::{info, instrument, warn};

use crate::components::{build_handler_chain, build_orchestrator, build_store, build_teloxide_bot};
use crate::config::BotConfig;
use crate::conversation::SessionStore;
use crate::telegram::{register_commands, run_dispatcher, TelegramBotAdapter};

/// Main entry: validate config, init logging, assemble components, register `/start`,
/// then dispatch updates until Ctrl-C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    let token = config.require_token()?.to_string();
    init_tracing(&config.log_file)?;

    let llm = EnvLlmConfig::from_env()?;
    let store = build_store(&config)?;
    let orchestrator = build_orchestrator(&config, &llm, store);

    info!(
        database_url = %config.database_url,
        page_size = config.page_size,
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&token, &config);
    if let Err(e) = register_commands(&teloxide_bot).await {
        warn!(error = %e, "Failed to register bot commands");
    }

    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let chain = build_handler_chain(bot, orchestrator, SessionStore::new(), config.page_size);

    info!("Bot started successfully");
    run_dispatcher(teloxide_bot, chain).await
}
