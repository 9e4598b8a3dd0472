//! Gold price fetching.
//!
//! Scrapes the current gold price from the milli.gold landing page and
//! normalises it from rial to toman.

pub mod error;
pub mod fetcher;
pub mod parser;

pub use error::{FetchError, FetchResult};
pub use fetcher::{FetcherConfig, MilliGoldFetcher, PriceSource};
pub use parser::{normalize_price_text, parse_price_html};
