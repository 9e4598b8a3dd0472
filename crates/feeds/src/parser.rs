//! HTML price extraction.
//!
//! The page quotes the price as rial text, e.g. `1,234,560 ریال`, sometimes
//! with Persian digits and separators.

use crate::{FetchError, FetchResult};
use gold_core::Price;
use scraper::{Html, Selector};

/// Unit suffix printed after the amount.
const RIAL_SUFFIX: &str = "ریال";

/// Compile a CSS selector, mapping errors into [`FetchError`].
pub(crate) fn compile_selector(selector: &str) -> FetchResult<Selector> {
    Selector::parse(selector).map_err(|e| FetchError::InvalidSelector(e.to_string()))
}

/// Extract the price from the first element matching `selector`.
pub fn parse_price_html(html: &str, selector: &str) -> FetchResult<Price> {
    let selector = compile_selector(selector)?;
    let document = Html::parse_document(html);

    let element = document
        .select(&selector)
        .next()
        .ok_or(FetchError::ElementNotFound)?;
    let text: String = element.text().collect();

    // A zero quote means the page has no usable price.
    match normalize_price_text(&text)? {
        0 => Err(FetchError::ZeroPrice),
        rial => Ok(Price::from_rial(rial)),
    }
}

/// Turn raw element text into an integer rial amount.
///
/// Drops the unit suffix, surrounding whitespace, bidi marks and ASCII /
/// Arabic thousands separators, and maps Persian / Arabic-Indic digits to
/// ASCII. What remains must be digits only: interior whitespace and signs
/// are rejected.
pub fn normalize_price_text(text: &str) -> FetchResult<i64> {
    let invalid = || FetchError::InvalidNumber(text.trim().to_string());

    let cleaned: String = text
        .replace(RIAL_SUFFIX, "")
        .chars()
        .filter(|c| !is_format_mark(*c))
        .collect::<String>()
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '٬'))
        .map(to_ascii_digit)
        .collect();

    if cleaned.is_empty() || !cleaned.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    cleaned.parse::<i64>().map_err(|_| invalid())
}

fn is_format_mark(c: char) -> bool {
    matches!(c, '\u{200c}' | '\u{200e}' | '\u{200f}')
}

fn to_ascii_digit(c: char) -> char {
    let zero = match c {
        '۰'..='۹' => '۰',
        '٠'..='٩' => '٠',
        _ => return c,
    };
    char::from_digit(c as u32 - zero as u32, 10).unwrap_or(c)
}
