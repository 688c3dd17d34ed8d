//! Telegram binding: teloxide → core adapters, [`estate_core::Bot`] implementation,
//! command registration and the update dispatcher.

mod adapters;
mod bot_adapter;
mod commands;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_keyboard, TelegramBotAdapter};
pub use commands::register_commands;
pub use runner::run_dispatcher;
