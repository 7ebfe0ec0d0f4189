//! Domain types for the bus arrivals board.
//!
//! All types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod arrival;
mod stop_code;
mod time;

pub use arrival::BusArrival;
pub use stop_code::{InvalidStopCode, StopCode};
pub use time::{ArrivalTime, Eta};
