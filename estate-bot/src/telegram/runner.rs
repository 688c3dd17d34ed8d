//! Update dispatcher: converts teloxide messages and button presses to core events and
//! passes them to the HandlerChain, one spawned task per update.

use anyhow::Result;
use estate_core::ToCoreEvent;
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use tracing::{error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

fn spawn_chain(chain: HandlerChain, event: estate_core::Event) {
    tokio::spawn(async move {
        info!(
            user_id = event.user().id,
            chat_id = event.chat().id,
            kind = event.kind(),
            "step: processing update (handler chain started)"
        );
        if let Err(e) = chain.handle(&event).await {
            error!(error = %e, user_id = event.user().id, "Handler chain failed");
        }
    });
}

async fn on_message(msg: teloxide::types::Message, chain: HandlerChain) -> ResponseResult<()> {
    if msg.text().is_none() {
        info!(chat_id = msg.chat.id.0, "Received non-text message");
        return Ok(());
    }
    spawn_chain(chain, TelegramMessageWrapper(&msg).to_core());
    Ok(())
}

async fn on_callback(query: teloxide::types::CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    spawn_chain(chain, TelegramCallbackWrapper(&query).to_core());
    Ok(())
}

/// Runs the dispatcher until Ctrl-C. Text messages and inline button presses both go
/// through `handler_chain`.
#[instrument(skip(bot, handler_chain))]
pub async fn run_dispatcher(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Connected to Telegram");
        }
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
