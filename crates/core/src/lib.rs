//! Core data types for the gold price alert bot.

pub mod format;
pub mod price;
pub mod range;

pub use format::*;
pub use price::*;
pub use range::*;
