//! Arrivals board client.
//!
//! The board is a third-party text display page that lists the next buses
//! at a stop as an HTML table. There is no API: we fetch the page with a
//! browser user agent and scrape the table.
//!
//! Key characteristics of the board:
//! - Stops are addressed by 8-digit NaPTAN code (`stopRef` query parameter)
//! - Times are "Due", a minute count, or an "HH:MM" timetabled time
//! - The low-floor column is the only hint at the vehicle type

mod client;
mod error;
mod parse;

pub use client::AcisClient;
pub use error::{FetchError, ParseError};
pub use parse::parse_departures;
