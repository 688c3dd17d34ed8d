//! Bot abstraction for sending texts and button menus.
//!
//! [`Bot`] is transport-agnostic; `estate-bot` implements it over teloxide and tests
//! substitute a recording implementation.

use crate::error::{EstateError, Result};
use crate::types::{Chat, Menu};
use async_trait::async_trait;

/// Sends plain messages and button menus, edits menus in place, acknowledges button presses.
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a menu (text plus buttons) and returns the transport message id.
    async fn send_menu(&self, chat: &Chat, menu: &Menu) -> Result<String>;
    /// Replaces the text and buttons of a previously sent menu.
    async fn edit_menu(&self, chat: &Chat, message_id: &str, menu: &Menu) -> Result<()>;
    /// Acknowledges a button press so the client stops its loading indicator.
    async fn answer_callback(&self, callback_id: &str) -> Result<()>;
}

/// Parses a transport message id string into an i32. Used by menu edits.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| EstateError::Bot(format!("Invalid message_id for edit: {}", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_message_id_valid() {
        assert_eq!(parse_message_id("123").unwrap(), 123);
        assert_eq!(parse_message_id("0").unwrap(), 0);
    }

    #[test]
    fn test_parse_message_id_invalid() {
        assert!(parse_message_id("").is_err());
        assert!(parse_message_id("abc").is_err());
        assert!(parse_message_id("12.3").is_err());
    }
}
