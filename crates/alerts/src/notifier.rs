//! Alert delivery abstraction.

use async_trait::async_trait;
use std::fmt;
use std::str::FromStr;
use teloxide::types::{ChatId, Recipient};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
}

/// Where alert messages go. Fixed for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Numeric chat id (users, groups, channels by id).
    Chat(i64),
    /// Public channel username, e.g. `@gold_alerts`.
    Channel(String),
}

impl FromStr for Destination {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(match s.parse::<i64>() {
            Ok(id) => Destination::Chat(id),
            Err(_) => Destination::Channel(s.to_string()),
        })
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Chat(id) => write!(f, "{}", id),
            Destination::Channel(name) => f.write_str(name),
        }
    }
}

impl From<&Destination> for Recipient {
    fn from(destination: &Destination) -> Self {
        match destination {
            Destination::Chat(id) => Recipient::Id(ChatId(*id)),
            Destination::Channel(name) => Recipient::ChannelUsername(name.clone()),
        }
    }
}

/// Sends a text message to a destination.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, destination: &Destination, message: &str) -> Result<(), NotifyError>;
}
