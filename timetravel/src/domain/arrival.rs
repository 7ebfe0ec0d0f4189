//! A single bus arrival scraped from the board.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::time::{ArrivalTime, Eta};

/// One row of the arrivals board.
///
/// The JSON field names match the public API: `bus`, `to`, `time`,
/// `double_decker`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusArrival {
    /// Service number; 0 when the board showed something non-numeric
    #[serde(rename = "bus")]
    pub service: u32,

    /// Destination as shown on the board
    #[serde(rename = "to")]
    pub destination: String,

    /// Arrival time as shown on the board
    pub time: ArrivalTime,

    /// Whether the bus is (probably) a double decker
    pub double_decker: bool,
}

impl BusArrival {
    /// Create a new arrival.
    pub fn new(
        service: u32,
        destination: impl Into<String>,
        time: impl Into<ArrivalTime>,
        double_decker: bool,
    ) -> Self {
        Self {
            service,
            destination: destination.into(),
            time: time.into(),
            double_decker,
        }
    }

    /// Returns the parsed arrival time.
    pub fn eta(&self) -> Eta {
        self.time.eta()
    }
}

impl fmt::Display for BusArrival {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (service, to, time) = (self.service, &self.destination, &self.time);

        if self.eta() == Eta::Due {
            write!(f, "Bus {service} going to {to} is {time}")
        } else if time.as_str().contains(':') {
            write!(f, "Bus {service} going to {to} @ {time}")
        } else {
            write!(f, "Bus {service} going to {to} in {time}")
        }
    }
}
