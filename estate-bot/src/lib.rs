//! # estate-bot
//!
//! Telegram front-end for the housing search: turns chat messages into searches, shows
//! results as paginated button menus grouped by building, and links each unit to its
//! agent on WhatsApp.
//!
//! ## Modules
//!
//! - [`config`] – BotConfig (env)
//! - [`conversation`] – action tokens, sessions, paging, menus
//! - [`handlers`] – LoggingHandler, SearchHandler
//! - [`telegram`] – teloxide adapters and dispatcher
//! - [`components`] / [`runner`] – assembly and `run_bot`

pub mod cli;
pub mod components;
pub mod config;
pub mod conversation;
pub mod handlers;
pub mod notifier;
pub mod runner;
pub mod telegram;

pub use cli::{Cli, Commands};
pub use config::BotConfig;
pub use handlers::{LoggingHandler, SearchHandler};
pub use notifier::{ChatNotifier, StdoutNotifier};
pub use runner::run_bot;
