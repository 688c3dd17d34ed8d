//! Chat identity type.

use serde::{Deserialize, Serialize};

/// Chat (private or group) identity. Sessions are keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}
