//! Price value scraped on each polling cycle.

use crate::format_amount;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Gold price in toman.
///
/// Transient: produced by one fetch, evaluated, then dropped.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    /// Rials per toman.
    pub const RIAL_PER_TOMAN: f64 = 10.0;

    /// Create a price already expressed in toman.
    pub fn new(toman: f64) -> Self {
        Self(toman)
    }

    /// Convert a rial amount as quoted by the source page.
    pub fn from_rial(rial: i64) -> Self {
        Self(rial as f64 / Self::RIAL_PER_TOMAN)
    }

    /// Value in toman.
    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}
