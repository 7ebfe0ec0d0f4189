//! JSON API for the arrivals board.
//!
//! Exposes a single endpoint, `GET /check_buses?naptan=<code>`, which
//! scrapes the board for the stop and returns the arrivals as JSON.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router, serve};
pub use state::AppState;
