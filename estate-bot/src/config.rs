//! Application config loaded from env: Telegram connection, logging, listing database, paging.

use anyhow::{Context, Result};
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://./estate.db";
pub const DEFAULT_LOG_FILE: &str = "logs/estate-bot.log";
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN; only the `run` command needs it.
    pub bot_token: Option<String>,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    pub log_file: String,
    /// Listing database (`sqlite:` URL)
    pub database_url: String,
    /// DEBUG_MODE: announce extracted search parameters in the chat
    pub debug_mode: bool,
    /// Buildings per result page
    pub page_size: usize,
}

fn flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = token.or_else(|| env::var("BOT_TOKEN").ok());
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let debug_mode = env::var("DEBUG_MODE").map(|v| flag(&v)).unwrap_or(false);
        let page_size = match env::var("PAGE_SIZE") {
            Ok(v) => v
                .trim()
                .parse()
                .with_context(|| format!("PAGE_SIZE is not a number: {}", v))?,
            Err(_) => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            bot_token,
            telegram_api_url,
            log_file,
            database_url,
            debug_mode,
            page_size,
        })
    }

    /// Validate config (telegram_api_url must be a valid URL if set, page size positive).
    pub fn validate(&self) -> Result<()> {
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        if self.page_size == 0 {
            anyhow::bail!("PAGE_SIZE must be at least 1");
        }
        Ok(())
    }

    /// The bot token, required to connect to Telegram.
    pub fn require_token(&self) -> Result<&str> {
        self.bot_token
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .context("BOT_TOKEN not set")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "LOG_FILE",
            "DATABASE_URL",
            "DEBUG_MODE",
            "PAGE_SIZE",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.require_token().unwrap(), "test_token");
        assert!(config.telegram_api_url.is_none());
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert!(!config.debug_mode);
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert!(config.validate().is_ok());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        clear_env();
        env::set_var("DATABASE_URL", "sqlite:///tmp/listings.db");
        env::set_var("TELOXIDE_API_URL", "http://localhost:8081");
        env::set_var("DEBUG_MODE", "True");
        env::set_var("PAGE_SIZE", "8");

        let config = BotConfig::load(Some("override_token".to_string())).unwrap();

        assert_eq!(config.require_token().unwrap(), "override_token");
        assert_eq!(config.database_url, "sqlite:///tmp/listings.db");
        assert_eq!(config.telegram_api_url.as_deref(), Some("http://localhost:8081"));
        assert!(config.debug_mode);
        assert_eq!(config.page_size, 8);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_token_only_fails_when_required() {
        clear_env();

        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_ok());
        assert!(config.require_token().is_err());
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_values() {
        clear_env();
        env::set_var("TELEGRAM_API_URL", "not-a-valid-url");
        let config = BotConfig::load(None).unwrap();
        assert!(config.validate().is_err());

        clear_env();
        env::set_var("PAGE_SIZE", "0");
        assert!(BotConfig::load(None).unwrap().validate().is_err());

        env::set_var("PAGE_SIZE", "five");
        assert!(BotConfig::load(None).is_err());

        clear_env();
    }
}
