//! Wraps teloxide::Bot and implements [`estate_core::Bot`]. Menus become inline keyboards;
//! tests can substitute another Bot impl.

use async_trait::async_trait;
use estate_core::{parse_message_id, Bot as CoreBot, Chat, EstateError, Menu, Result};
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId};

/// Converts menu rows into an inline keyboard; each button carries its action token.
pub fn to_keyboard(menu: &Menu) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(menu.rows.iter().map(|row| {
        row.iter()
            .map(|b| InlineKeyboardButton::callback(b.label.clone(), b.data.clone()))
            .collect::<Vec<_>>()
    }))
}

/// Thin wrapper around teloxide::Bot that implements estate-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }

    /// Returns the underlying teloxide::Bot for direct API use when needed.
    pub fn inner(&self) -> &teloxide::Bot {
        &self.bot
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| EstateError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_menu(&self, chat: &Chat, menu: &Menu) -> Result<String> {
        let sent = self
            .bot
            .send_message(ChatId(chat.id), menu.text.clone())
            .reply_markup(to_keyboard(menu))
            .await
            .map_err(|e| EstateError::Bot(e.to_string()))?;
        Ok(sent.id.to_string())
    }

    async fn edit_menu(&self, chat: &Chat, message_id: &str, menu: &Menu) -> Result<()> {
        let id = parse_message_id(message_id)?;
        self.bot
            .edit_message_text(ChatId(chat.id), MessageId(id), menu.text.clone())
            .reply_markup(to_keyboard(menu))
            .await
            .map_err(|e| EstateError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<()> {
        self.bot
            .answer_callback_query(teloxide::types::CallbackQueryId(callback_id.to_string()))
            .await
            .map_err(|e| EstateError::Bot(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use estate_core::Button;

    #[test]
    fn test_to_keyboard_keeps_rows_and_tokens() {
        let menu = Menu::new("Results")
            .row(vec![Button::new("Marina Tower (2)", "group:abc")])
            .row(vec![Button::new("« Prev", "page:prev"), Button::new("Next »", "page:next")]);

        let keyboard = to_keyboard(&menu);

        assert_eq!(keyboard.inline_keyboard.len(), 2);
        assert_eq!(keyboard.inline_keyboard[1].len(), 2);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "Marina Tower (2)");
    }
}
