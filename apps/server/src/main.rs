//! Gold Alert Bot
//!
//! Polls the milli.gold price page on a fixed interval and sends a Telegram
//! message whenever the price leaves the configured range.

mod config;
mod scheduler;

use clap::Parser;
use config::AppConfig;
use gold_alerts::TelegramBot;
use gold_feeds::{FetcherConfig, MilliGoldFetcher};
use scheduler::{run_scheduler, Schedule};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Gold Alert Bot CLI
#[derive(Parser, Debug)]
#[command(name = "gold-alert-bot")]
#[command(about = "Telegram alerts when the gold price leaves a range", long_about = None)]
struct Args {
    /// Log level: trace, debug, info, warn, error
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Price page to scrape
    #[arg(long, default_value = FetcherConfig::DEFAULT_URL)]
    url: String,

    /// Seconds to wait before the first price check
    #[arg(long, default_value_t = Schedule::DEFAULT_FIRST_DELAY.as_secs())]
    first_delay_secs: u64,
}

fn init_logging(level: &str) {
    let level = match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => "info",
    };

    // RUST_LOG wins over --log-level when set.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    init_logging(&args.log_level);

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let range = config.range();
    let destination = config.destination();

    info!("🚀 Gold Alert Bot starting...");
    info!("  Range: {} Toman", range.describe());
    info!("  Check interval: {} seconds", config.check_interval_secs);
    info!("  Destination: {}", destination);
    info!("  Source: {}", args.url);

    let fetcher = match MilliGoldFetcher::new(FetcherConfig {
        url: args.url.clone(),
        ..Default::default()
    }) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            error!("Failed to build price fetcher: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let bot = Arc::new(TelegramBot::new(&config.bot_token, range, config.interval()));

    let schedule = Schedule {
        first_delay: Duration::from_secs(args.first_delay_secs),
        ..Schedule::new(config.interval())
    };
    tokio::spawn(run_scheduler(
        Arc::new(fetcher),
        Arc::new(bot.notifier()),
        destination,
        range,
        schedule,
    ));

    info!("Listening for Telegram commands, press Ctrl+C to stop...");
    bot.run().await;

    info!("👋 Gold Alert Bot stopped");
    ExitCode::SUCCESS
}
