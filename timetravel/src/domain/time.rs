//! Arrival time handling for the upstream arrivals board.
//!
//! The board shows arrival times in one of three informal encodings:
//! the literal "Due", a count of minutes ("9" or "9 mins"), or a
//! timetabled wall-clock time ("14:32"). The text is classified once,
//! when the board is scraped, and kept alongside the raw text so the
//! JSON output is exactly what the board showed.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification of an arrival time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eta {
    /// The bus is at or approaching the stop.
    Due,

    /// Live prediction: the bus arrives in this many minutes.
    InMinutes(i64),

    /// Timetabled arrival at a wall-clock time today (or tomorrow).
    At { hour: u32, minute: u32 },

    /// Text we could not make sense of.
    Unknown,
}

impl Eta {
    /// Classify an arrival time string.
    ///
    /// Only the first whitespace-delimited token is inspected, so
    /// "9 mins" and "9" classify the same way.
    ///
    /// # Examples
    ///
    /// ```
    /// use timetravel::domain::Eta;
    ///
    /// assert_eq!(Eta::parse("Due"), Eta::Due);
    /// assert_eq!(Eta::parse("9 mins"), Eta::InMinutes(9));
    /// assert_eq!(Eta::parse("14:32"), Eta::At { hour: 14, minute: 32 });
    /// assert_eq!(Eta::parse("25:00"), Eta::Unknown);
    /// assert_eq!(Eta::parse(""), Eta::Unknown);
    /// ```
    pub fn parse(s: &str) -> Self {
        let Some(token) = s.split_whitespace().next() else {
            return Eta::Unknown;
        };

        if token.eq_ignore_ascii_case("due") {
            return Eta::Due;
        }

        if token.contains(':') {
            return parse_hhmm(token).map_or(Eta::Unknown, |(hour, minute)| Eta::At {
                hour,
                minute,
            });
        }

        token.parse().map_or(Eta::Unknown, Eta::InMinutes)
    }
}

/// Parse "HH:MM" (or "H:MM") into hour and minute.
fn parse_hhmm(token: &str) -> Option<(u32, u32)> {
    let (hour, minute) = token.split_once(':')?;

    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }

    let hour: u32 = hour.parse().ok()?;
    let minute: u32 = minute.parse().ok()?;

    if hour > 23 || minute > 59 {
        return None;
    }

    Some((hour, minute))
}

/// An arrival time as shown on the board.
///
/// Serializes as the raw board text. Deserializing re-classifies it, so a
/// JSON round trip yields an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ArrivalTime {
    raw: String,
    eta: Eta,
}

impl ArrivalTime {
    /// Create an arrival time from the raw board text.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let eta = Eta::parse(&raw);
        Self { raw, eta }
    }

    /// Returns the text exactly as the board showed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the parsed classification.
    pub fn eta(&self) -> Eta {
        self.eta
    }
}

impl From<String> for ArrivalTime {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for ArrivalTime {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<ArrivalTime> for String {
    fn from(time: ArrivalTime) -> Self {
        time.raw
    }
}

impl fmt::Display for ArrivalTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
