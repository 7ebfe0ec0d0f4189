//! Live bus arrivals for a stop.
//!
//! Scrapes the arrivals board for a NaPTAN stop code, prints it as a
//! table in the terminal, and can serve the same data as JSON.

pub mod acis;
pub mod board;
pub mod config;
pub mod domain;
pub mod error;
pub mod render;
pub mod web;

#[cfg(test)]
mod testing;

pub use error::Error;
