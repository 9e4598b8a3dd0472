//! Acceptable price range and the alert decision.

use crate::{group_thousands, Price};
use serde::{Deserialize, Serialize};

/// Configured acceptable range, in toman.
///
/// `lower <= upper` is not enforced. With inverted bounds every price
/// alerts on one side or the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub lower: i64,
    pub upper: i64,
}

impl PriceRange {
    pub fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// Decide whether `price` warrants an alert.
    pub fn evaluate(&self, price: Price) -> AlertOutcome {
        evaluate(price, self.lower, self.upper)
    }

    /// `"L to U"` with thousands separators.
    pub fn describe(&self) -> String {
        format!(
            "{} to {}",
            group_thousands(self.lower),
            group_thousands(self.upper)
        )
    }
}

/// Result of comparing a price against the range.
#[derive(Debug, Clone, PartialEq)]
pub enum AlertOutcome {
    /// Price is within `[lower, upper]`; nothing is sent.
    NoAlert,
    /// Price fell below the lower bound.
    BelowRange(String),
    /// Price rose above the upper bound.
    AboveRange(String),
}

impl AlertOutcome {
    /// Message to deliver, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            AlertOutcome::NoAlert => None,
            AlertOutcome::BelowRange(msg) | AlertOutcome::AboveRange(msg) => Some(msg),
        }
    }

    pub fn is_alert(&self) -> bool {
        !matches!(self, AlertOutcome::NoAlert)
    }
}

/// Compare `price` against `lower`/`upper`.
///
/// Comparisons are strict: a price equal to either bound does not alert.
pub fn evaluate(price: Price, lower: i64, upper: i64) -> AlertOutcome {
    let value = price.value();
    let range = PriceRange::new(lower, upper).describe();

    if value < lower as f64 {
        AlertOutcome::BelowRange(format!(
            "📉 Gold price dropped below the range!\nCurrent price: {} Toman\nRange: {}",
            price, range
        ))
    } else if value > upper as f64 {
        AlertOutcome::AboveRange(format!(
            "📈 Gold price rose above the range!\nCurrent price: {} Toman\nRange: {}",
            price, range
        ))
    } else {
        AlertOutcome::NoAlert
    }
}
