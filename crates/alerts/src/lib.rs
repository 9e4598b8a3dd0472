//! Telegram delivery for gold price alerts.
//!
//! This crate provides:
//! - A `Notifier` abstraction over alert delivery
//! - A Telegram implementation backed by teloxide
//! - The bot's command handler (`/start`, `/help`)

pub mod notifier;
pub mod telegram;

pub use notifier::{Destination, Notifier, NotifyError};
pub use telegram::{start_message, Command, TelegramBot, TelegramNotifier};
