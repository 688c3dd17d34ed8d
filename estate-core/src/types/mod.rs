//! Core types: user, chat, message, button callback, menu, handler response, and Handler trait.

mod callback;
mod chat;
mod event;
mod handler;
mod menu;
mod message;
mod response;
mod user;

pub use callback::CallbackEvent;
pub use chat::Chat;
pub use event::Event;
pub use handler::{Handler, ToCoreEvent, ToCoreUser};
pub use menu::{Button, Menu};
pub use message::Message;
pub use response::HandlerResponse;
pub use user::User;
