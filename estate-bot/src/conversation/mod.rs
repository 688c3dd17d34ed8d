//! Conversation state and presentation: button action tokens, per-search building keys,
//! chat sessions, paging and menu rendering.

pub mod action;
pub mod keys;
pub mod pager;
pub mod render;
pub mod session;

pub use action::{ActionParseError, BackTarget, CallbackAction, PageDirection};
pub use keys::GroupKeys;
pub use pager::{page_count, Page};
pub use session::{SearchContext, Session, SessionStore};
