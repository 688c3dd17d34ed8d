//! # estate-core
//!
//! Core types and traits for the housing-search bot: [`Bot`], [`Handler`], incoming
//! [`Event`]s, button [`Menu`]s and tracing initialization. Transport-agnostic; the
//! Telegram binding lives in `estate-bot`.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{EstateError, Result};
pub use logger::init_tracing;
pub use types::{
    Button, CallbackEvent, Chat, Event, Handler, HandlerResponse, Menu, Message, ToCoreEvent,
    ToCoreUser, User,
};
