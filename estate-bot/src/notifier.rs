//! [`Notifier`] implementations: progress messages into a chat or onto stdout.

use std::sync::Arc;

use async_trait::async_trait;
use estate_core::{Bot, Chat};
use search_orchestrator::Notifier;
use tracing::warn;

/// Sends progress messages to one chat. Delivery failures are logged and ignored.
pub struct ChatNotifier {
    bot: Arc<dyn Bot>,
    chat: Chat,
}

impl ChatNotifier {
    pub fn new(bot: Arc<dyn Bot>, chat: Chat) -> Self {
        Self { bot, chat }
    }
}

#[async_trait]
impl Notifier for ChatNotifier {
    async fn notify(&self, text: &str) {
        if let Err(e) = self.bot.send_message(&self.chat, text).await {
            warn!(error = %e, chat_id = self.chat.id, "Failed to send progress message");
        }
    }
}

/// Prints progress messages, for the one-shot `search` command.
pub struct StdoutNotifier;

#[async_trait]
impl Notifier for StdoutNotifier {
    async fn notify(&self, text: &str) {
        println!("> {}", text);
    }
}
