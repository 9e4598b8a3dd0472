//! Telegram bot handlers.

use crate::notifier::{Destination, Notifier, NotifyError};
use async_trait::async_trait;
use gold_core::PriceRange;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use teloxide::utils::command::BotCommands;
use tracing::{debug, info};

/// Bot commands.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Show the monitored range and check interval")]
    Start,
    #[command(description = "Show help")]
    Help,
}

/// Reply to `/start`.
pub fn start_message(range: &PriceRange, interval: Duration) -> String {
    format!(
        "Bot is running!\nCurrent range: {} Toman\nChecking every {} seconds.",
        range.describe(),
        interval.as_secs()
    )
}

/// Sends alerts through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, destination: &Destination, message: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(Recipient::from(destination), message)
            .await?;
        debug!(destination = %destination, "Telegram message delivered");
        Ok(())
    }
}

/// Telegram bot wrapper answering inbound commands.
///
/// Commands are accepted from anyone who can message the bot.
pub struct TelegramBot {
    bot: Bot,
    range: PriceRange,
    interval: Duration,
}

impl TelegramBot {
    /// Create a new bot with the given token.
    pub fn new(token: &str, range: PriceRange, interval: Duration) -> Self {
        Self::with_bot(Bot::new(token), range, interval)
    }

    pub fn with_bot(bot: Bot, range: PriceRange, interval: Duration) -> Self {
        Self {
            bot,
            range,
            interval,
        }
    }

    /// Notifier sharing this bot's connection.
    pub fn notifier(&self) -> TelegramNotifier {
        TelegramNotifier::new(self.bot.clone())
    }

    /// Text sent for a command.
    pub fn reply_for(&self, cmd: &Command) -> String {
        match cmd {
            Command::Start => start_message(&self.range, self.interval),
            Command::Help => Command::descriptions().to_string(),
        }
    }

    /// Long-poll for updates until Ctrl+C.
    pub async fn run(self: Arc<Self>) {
        let bot = self.bot.clone();
        let handler = Update::filter_message().filter_command::<Command>().endpoint(
            move |bot: Bot, msg: Message, cmd: Command| {
                let this = Arc::clone(&self);
                async move { this.handle_command(bot, msg, cmd).await }
            },
        );

        Dispatcher::builder(bot, handler)
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }

    async fn handle_command(
        &self,
        bot: Bot,
        msg: Message,
        cmd: Command,
    ) -> Result<(), NotifyError> {
        info!(chat_id = %msg.chat.id, command = ?cmd, "Command received");
        bot.send_message(msg.chat.id, self.reply_for(&cmd)).await?;
        Ok(())
    }
}
