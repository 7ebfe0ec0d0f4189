//! Arrivals board error types.

/// Errors that can occur when fetching the arrivals board.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// HTTP request failed (network error, body read error, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Board returned a status other than 200
    #[error("status != 200: status: {status}")]
    Status { status: reqwest::StatusCode },

    /// Board HTML could not be scraped
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Errors from scraping the board HTML.
///
/// Malformed cells are not errors: they are defaulted while parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The page contains no `<table>`
    #[error("no arrivals table in page")]
    MissingTable,

    /// A built-in CSS selector failed to compile
    #[error("invalid selector: {0}")]
    Selector(&'static str),
}
