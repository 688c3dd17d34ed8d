//! Error type for the bot core.

use thiserror::Error;

/// Errors raised while talking to the chat transport.
#[derive(Error, Debug)]
pub enum EstateError {
    #[error("Bot error: {0}")]
    Bot(String),
}

/// Result type for core operations; uses [`EstateError`].
pub type Result<T> = std::result::Result<T, EstateError>;
