//! Button press (callback query) event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{chat::Chat, user::User};

/// A press on an inline button. `data` is the opaque action token attached to the button.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackEvent {
    /// Transport id used to acknowledge the press.
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Id of the message carrying the pressed button, when still accessible.
    pub message_id: Option<String>,
    pub data: String,
    pub created_at: DateTime<Utc>,
}
