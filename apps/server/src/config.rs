//! Application configuration.
//!
//! Read once at startup from the environment (optionally seeded from a
//! `.env` file) and passed down explicitly.

use gold_alerts::Destination;
use gold_core::PriceRange;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    Missing(Vec<&'static str>),

    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    #[error("CHECK_INTERVAL must be greater than zero")]
    ZeroInterval,
}

/// Application configuration.
#[derive(Clone)]
pub struct AppConfig {
    /// Telegram bot token.
    pub bot_token: String,
    /// Alert destination (chat id or channel username).
    pub chat_id: String,
    /// Lower bound of the acceptable range, in toman.
    pub min_price: i64,
    /// Upper bound of the acceptable range, in toman.
    pub max_price: i64,
    /// Seconds between price checks.
    pub check_interval_secs: u64,
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("min_price", &self.min_price)
            .field("max_price", &self.max_price)
            .field("check_interval_secs", &self.check_interval_secs)
            .finish()
    }
}

impl AppConfig {
    pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 300;

    /// Load from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    ///
    /// `BOT_TOKEN`, `CHAT_ID`, `MIN_PRICE` and `MAX_PRICE` must be present
    /// and non-zero. A zero price counts as unset. `MIN_PRICE <= MAX_PRICE`
    /// is not checked.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bot_token = lookup("BOT_TOKEN").unwrap_or_default();
        let chat_id = lookup("CHAT_ID").unwrap_or_default();
        let min_price: i64 = parse_var(&lookup, "MIN_PRICE", 0)?;
        let max_price: i64 = parse_var(&lookup, "MAX_PRICE", 0)?;
        let check_interval_secs: u64 =
            parse_var(&lookup, "CHECK_INTERVAL", Self::DEFAULT_CHECK_INTERVAL_SECS)?;

        let mut missing = Vec::new();
        if bot_token.trim().is_empty() {
            missing.push("BOT_TOKEN");
        }
        if chat_id.trim().is_empty() {
            missing.push("CHAT_ID");
        }
        if min_price == 0 {
            missing.push("MIN_PRICE");
        }
        if max_price == 0 {
            missing.push("MAX_PRICE");
        }
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        if check_interval_secs == 0 {
            return Err(ConfigError::ZeroInterval);
        }

        Ok(Self {
            bot_token: bot_token.trim().to_string(),
            chat_id: chat_id.trim().to_string(),
            min_price,
            max_price,
            check_interval_secs,
        })
    }

    pub fn range(&self) -> PriceRange {
        PriceRange::new(self.min_price, self.max_price)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.check_interval_secs)
    }

    pub fn destination(&self) -> Destination {
        match self.chat_id.parse() {
            Ok(dest) => dest,
            Err(never) => match never {},
        }
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn full_env() -> Vec<(&'static str, &'static str)> {
        vec![
            ("BOT_TOKEN", "123:ABC"),
            ("CHAT_ID", "-100200300"),
            ("MIN_PRICE", "7000000"),
            ("MAX_PRICE", "7500000"),
        ]
    }

    #[test]
    fn test_load_with_default_interval() {
        let config = AppConfig::from_lookup(lookup_from(&full_env())).unwrap();
        assert_eq!(config.bot_token, "123:ABC");
        assert_eq!(config.chat_id, "-100200300");
        assert_eq!(config.range(), PriceRange::new(7_000_000, 7_500_000));
        assert_eq!(config.interval(), Duration::from_secs(300));
        assert_eq!(config.destination(), Destination::Chat(-100200300));
    }

    #[test]
    fn test_load_custom_interval() {
        let mut env = full_env();
        env.push(("CHECK_INTERVAL", "60"));
        let config = AppConfig::from_lookup(lookup_from(&env)).unwrap();
        assert_eq!(config.check_interval_secs, 60);
    }

    #[test]
    fn test_min_price_unset_fails() {
        let env: Vec<_> = full_env()
            .into_iter()
            .filter(|(k, _)| *k != "MIN_PRICE")
            .collect();
        let err = AppConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["MIN_PRICE"]));
    }

    #[test]
    fn test_zero_price_counts_as_unset() {
        let mut env = full_env();
        env.retain(|(k, _)| *k != "MAX_PRICE");
        env.push(("MAX_PRICE", "0"));
        let err = AppConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert_eq!(err, ConfigError::Missing(vec!["MAX_PRICE"]));
    }

    #[test]
    fn test_everything_missing() {
        let err = AppConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required environment variables: BOT_TOKEN, CHAT_ID, MIN_PRICE, MAX_PRICE"
        );
    }

    #[test]
    fn test_invalid_integer() {
        let mut env = full_env();
        env.push(("CHECK_INTERVAL", "five minutes"));
        let err = AppConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::Invalid {
                var: "CHECK_INTERVAL",
                value: "five minutes".to_string()
            }
        );
    }

    #[test]
    fn test_zero_interval_rejected() {
        let mut env = full_env();
        env.push(("CHECK_INTERVAL", "0"));
        let err = AppConfig::from_lookup(lookup_from(&env)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroInterval);
    }

    #[test]
    fn test_inverted_range_accepted() {
        let mut env = full_env();
        env.retain(|(k, _)| !k.ends_with("_PRICE"));
        env.push(("MIN_PRICE", "2000"));
        env.push(("MAX_PRICE", "1000"));
        let config = AppConfig::from_lookup(lookup_from(&env)).unwrap();
        assert_eq!(config.range(), PriceRange::new(2000, 1000));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = AppConfig::from_lookup(lookup_from(&full_env())).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("123:ABC"));
        assert!(debug.contains("<redacted>"));
    }
}
