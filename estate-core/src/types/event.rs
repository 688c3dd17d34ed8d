//! Incoming update routed through the handler chain.

use super::{callback::CallbackEvent, chat::Chat, message::Message, user::User};

/// Either a text turn or a button press.
#[derive(Debug, Clone)]
pub enum Event {
    Message(Message),
    Callback(CallbackEvent),
}

impl Event {
    pub fn user(&self) -> &User {
        match self {
            Event::Message(m) => &m.user,
            Event::Callback(c) => &c.user,
        }
    }

    pub fn chat(&self) -> &Chat {
        match self {
            Event::Message(m) => &m.chat,
            Event::Callback(c) => &c.chat,
        }
    }

    /// Transport id of the message or callback.
    pub fn id(&self) -> &str {
        match self {
            Event::Message(m) => &m.id,
            Event::Callback(c) => &c.id,
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Message(_) => "message",
            Event::Callback(_) => "callback",
        }
    }
}
