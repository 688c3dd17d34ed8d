//! Incoming text message.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A single text turn from a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// True when the text is the given bot command, with or without `@botname` suffix or arguments.
    pub fn is_command(&self, command: &str) -> bool {
        let Some(first) = self.content.split_whitespace().next() else {
            return false;
        };
        let Some(name) = first.strip_prefix('/') else {
            return false;
        };
        name.split('@').next() == Some(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str) -> Message {
        Message {
            id: "1".to_string(),
            user: User::unknown(),
            chat: Chat {
                id: 1,
                chat_type: "private".to_string(),
            },
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_is_command() {
        assert!(message("/start").is_command("start"));
        assert!(message("/start@estate_bot").is_command("start"));
        assert!(message("  /start now").is_command("start"));
        assert!(!message("start").is_command("start"));
        assert!(!message("/stop").is_command("start"));
        assert!(!message("").is_command("start"));
    }
}
