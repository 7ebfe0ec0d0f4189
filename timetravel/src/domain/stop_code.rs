//! Bus stop code type.

use std::fmt;

/// Error returned when parsing an invalid NaPTAN stop code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid stop code: {reason}")]
pub struct InvalidStopCode {
    reason: &'static str,
}

/// A valid 8-digit NaPTAN stop code.
///
/// Stop codes identify a single physical bus stop to the upstream
/// arrivals board. This type guarantees that any `StopCode` value is
/// exactly eight ASCII digits.
///
/// # Examples
///
/// ```
/// use timetravel::domain::StopCode;
///
/// let stop = StopCode::parse("22001688").unwrap();
/// assert_eq!(stop.as_str(), "22001688");
///
/// // Wrong length is rejected
/// assert!(StopCode::parse("1234567").is_err());
///
/// // Letters and punctuation are rejected
/// assert!(StopCode::parse("2200168A").is_err());
/// assert!(StopCode::parse("2200-688").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct StopCode([u8; 8]);

impl StopCode {
    /// Parse a stop code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidStopCode> {
        let bytes = s.as_bytes();

        if bytes.len() != 8 {
            return Err(InvalidStopCode {
                reason: "must be exactly 8 characters",
            });
        }

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(InvalidStopCode {
                reason: "must contain only digits 0-9",
            });
        }

        let mut code = [0u8; 8];
        code.copy_from_slice(bytes);
        Ok(StopCode(code))
    }

    /// Returns the stop code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopCode({})", self.as_str())
    }
}

impl fmt::Display for StopCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
