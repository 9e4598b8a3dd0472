//! Fixed-interval price checking loop.
//!
//! One task owns the timer and runs fetch -> evaluate -> notify inline, so
//! cycles never overlap. A cycle that outlives the interval causes the missed
//! ticks to be skipped rather than bunched up.

use gold_alerts::{Destination, Notifier, NotifyError};
use gold_core::{AlertOutcome, Price, PriceRange};
use gold_feeds::{FetchError, PriceSource};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, error, info};

/// Timing of the check loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    /// Delay before the first check.
    pub first_delay: Duration,
    /// Period between checks. Must be non-zero.
    pub interval: Duration,
}

impl Schedule {
    pub const DEFAULT_FIRST_DELAY: Duration = Duration::from_secs(10);

    pub fn new(interval: Duration) -> Self {
        Self {
            first_delay: Self::DEFAULT_FIRST_DELAY,
            interval,
        }
    }
}

/// What happened in one check.
#[derive(Debug)]
pub enum CycleReport {
    /// No price this cycle; the fetcher already logged why.
    Skipped(FetchError),
    /// Price within range, nothing sent.
    InRange(Price),
    /// Price out of range and the alert was delivered.
    Alerted(Price),
    /// Price out of range but delivery failed.
    DeliveryFailed(Price, NotifyError),
}

/// Run a single fetch/evaluate/notify pass.
///
/// Delivery failures are logged and reported, never propagated: the next
/// cycle runs as usual and nothing is retried.
pub async fn run_cycle(
    source: &dyn PriceSource,
    notifier: &dyn Notifier,
    destination: &Destination,
    range: &PriceRange,
) -> CycleReport {
    let price = match source.fetch_price().await {
        Ok(price) => price,
        Err(e) => return CycleReport::Skipped(e),
    };

    info!(price = %price, "Current gold price (Toman)");

    let outcome = range.evaluate(price);
    let message = match &outcome {
        AlertOutcome::NoAlert => return CycleReport::InRange(price),
        AlertOutcome::BelowRange(msg) | AlertOutcome::AboveRange(msg) => msg,
    };

    match notifier.notify(destination, message).await {
        Ok(()) => {
            info!(
                destination = %destination,
                price = %price,
                range = %range.describe(),
                "Alert sent"
            );
            CycleReport::Alerted(price)
        }
        Err(e) => {
            error!(
                destination = %destination,
                price = %price,
                error = %e,
                "Failed to send alert"
            );
            CycleReport::DeliveryFailed(price, e)
        }
    }
}

/// Check the price on `schedule` forever.
pub async fn run_scheduler(
    source: Arc<dyn PriceSource>,
    notifier: Arc<dyn Notifier>,
    destination: Destination,
    range: PriceRange,
    schedule: Schedule,
) {
    info!(
        first_delay_secs = schedule.first_delay.as_secs(),
        interval_secs = schedule.interval.as_secs(),
        "Starting price scheduler"
    );

    let mut ticker = time::interval_at(Instant::now() + schedule.first_delay, schedule.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;
        match run_cycle(source.as_ref(), notifier.as_ref(), &destination, &range).await {
            CycleReport::Skipped(e) => debug!(error = %e, "Cycle skipped"),
            CycleReport::InRange(price) => debug!(price = %price, "Cycle done, price in range"),
            CycleReport::Alerted(price) => debug!(price = %price, "Cycle done, alert sent"),
            CycleReport::DeliveryFailed(price, e) => {
                debug!(price = %price, error = %e, "Cycle done, alert undelivered")
            }
        }
    }
}
