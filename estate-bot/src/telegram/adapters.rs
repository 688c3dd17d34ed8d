//! Adapters from Telegram (teloxide) types to estate_core types.

use estate_core::{CallbackEvent, Chat, Event, Message, ToCoreEvent, ToCoreUser, User};

/// Wraps a teloxide User for conversion to core [`User`].
pub struct TelegramUserWrapper<'a>(pub &'a teloxide::types::User);

impl<'a> ToCoreUser for TelegramUserWrapper<'a> {
    fn to_core(&self) -> User {
        User {
            id: self.0.id.0 as i64,
            username: self.0.username.clone(),
            first_name: Some(self.0.first_name.clone()),
            last_name: self.0.last_name.clone(),
        }
    }
}

fn core_chat(chat: &teloxide::types::Chat) -> Chat {
    Chat {
        id: chat.id.0,
        chat_type: format!("{:?}", chat.kind),
    }
}

/// Wraps a teloxide Message for conversion to a core message [`Event`].
pub struct TelegramMessageWrapper<'a>(pub &'a teloxide::types::Message);

impl<'a> ToCoreEvent for TelegramMessageWrapper<'a> {
    fn to_core(&self) -> Event {
        Event::Message(Message {
            id: self.0.id.to_string(),
            user: self
                .0
                .from
                .as_ref()
                .map(|u| TelegramUserWrapper(u).to_core())
                .unwrap_or_else(User::unknown),
            chat: core_chat(&self.0.chat),
            content: self.0.text().unwrap_or("").to_string(),
            created_at: chrono::Utc::now(),
        })
    }
}

/// Wraps a teloxide CallbackQuery (inline button press) for conversion to a core callback [`Event`].
///
/// Presses on messages the bot can no longer see fall back to the presser's private chat.
pub struct TelegramCallbackWrapper<'a>(pub &'a teloxide::types::CallbackQuery);

impl<'a> ToCoreEvent for TelegramCallbackWrapper<'a> {
    fn to_core(&self) -> Event {
        let query = self.0;
        let user = TelegramUserWrapper(&query.from).to_core();
        let chat = query
            .message
            .as_ref()
            .map(|m| core_chat(m.chat()))
            .unwrap_or_else(|| Chat {
                id: user.id,
                chat_type: "Private".to_string(),
            });

        Event::Callback(CallbackEvent {
            id: query.id.to_string(),
            user,
            chat,
            message_id: query.message.as_ref().map(|m| m.id().to_string()),
            data: query.data.clone().unwrap_or_default(),
            created_at: chrono::Utc::now(),
        })
    }
}
