//! Error types for price fetching.

use thiserror::Error;

/// Reasons a fetch cycle produced no price.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("Price element not found in page")]
    ElementNotFound,

    #[error("Invalid price text: {0:?}")]
    InvalidNumber(String),

    #[error("Price is zero")]
    ZeroPrice,

    #[error("Invalid price selector: {0}")]
    InvalidSelector(String),
}

impl FetchError {
    /// Returns true if the request hit the client timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, FetchError::Http(e) if e.is_timeout())
    }
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;
