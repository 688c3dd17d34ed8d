use anyhow::Result;
use teloxide::prelude::*;
use teloxide::types::BotCommand;
use tracing::info;

/// Replaces the bot's command list with `/start`.
pub async fn register_commands(bot: &teloxide::Bot) -> Result<()> {
    bot.delete_my_commands().await?;
    bot.set_my_commands(vec![BotCommand::new("start", "Start a new property search")])
        .await?;
    info!("Bot commands registered");
    Ok(())
}
