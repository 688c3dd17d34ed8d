//! Assembly of the bot: listing store, criteria extractor, orchestrator, handler chain and
//! the teloxide client.

use std::sync::Arc;

use anyhow::{Context, Result};
use criteria_extractor::{EnvLlmConfig, OpenAiCriteriaExtractor};
use estate_core::Bot;
use handler_chain::HandlerChain;
use openai_client::mask_token;
use property_store::SqlitePropertyStore;
use search_orchestrator::SearchOrchestrator;
use tracing::{error, info, instrument};

use crate::config::BotConfig;
use crate::conversation::SessionStore;
use crate::handlers::{LoggingHandler, SearchHandler};

/// Opens the listing store named by `DATABASE_URL`.
pub fn build_store(config: &BotConfig) -> Result<Arc<SqlitePropertyStore>> {
    let store = SqlitePropertyStore::new(&config.database_url)
        .with_context(|| format!("Invalid DATABASE_URL: {}", config.database_url))?;
    Ok(Arc::new(store))
}

/// Orchestrator over `store` with an OpenAI-backed extractor.
#[instrument(skip(config, llm, store))]
pub fn build_orchestrator(
    config: &BotConfig,
    llm: &EnvLlmConfig,
    store: Arc<SqlitePropertyStore>,
) -> SearchOrchestrator {
    info!(
        model = %llm.llm_model,
        base_url = %llm.openai_base_url,
        api_key = %mask_token(&llm.openai_api_key),
        debug_mode = config.debug_mode,
        "Building search orchestrator"
    );
    let extractor = Arc::new(OpenAiCriteriaExtractor::from_config(llm));
    SearchOrchestrator::new(store, extractor).with_debug_mode(config.debug_mode)
}

/// Logging first, then the search conversation.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    orchestrator: SearchOrchestrator,
    sessions: SessionStore,
    page_size: usize,
) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(SearchHandler::new(
            bot,
            orchestrator,
            sessions,
            page_size,
        )))
}

/// teloxide client for `token`, pointed at TELEGRAM_API_URL when set.
pub fn build_teloxide_bot(token: &str, config: &BotConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(token);
    if let Some(ref url_str) = config.telegram_api_url {
        match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        }
    } else {
        bot
    }
}
