//! Handlers: logging of every event, and the housing-search conversation.

mod logging_handler;
mod search_handler;

pub use logging_handler::LoggingHandler;
pub use search_handler::{
    SearchHandler, EXPIRED_MESSAGE, GENERIC_ERROR_MESSAGE, GREETING, NO_SEARCH_FALLBACK,
};
