//! Top-level error type for the command line.

use crate::acis::FetchError;
use crate::domain::InvalidStopCode;

/// Anything that stops the program with a non-zero exit status.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stop code given on the command line is not 8 digits
    #[error("NapTAN code must be an 8 digit number.")]
    InvalidStopCode(#[from] InvalidStopCode),

    /// The arrivals board could not be fetched or read
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Writing to the terminal or binding the API socket failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
