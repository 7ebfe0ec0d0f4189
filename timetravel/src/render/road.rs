//! Emoji "road" showing roughly how far away a bus is.
//!
//! The road is cosmetic: a stop, some underscores, then the bus. Fewer
//! underscores between the stop and the bus means the bus is closer.

use chrono::{Duration, NaiveDateTime, NaiveTime};

use crate::domain::Eta;

/// Bus stop marker.
pub const STOP: &str = "🚏";

/// Single decker (low floor) bus.
pub const SINGLE_DECKER: &str = "🚌";

/// Double decker bus. There is no double decker emoji, so this borrows
/// the oncoming bus.
pub const DOUBLE_DECKER: &str = "🚍";

/// One road segment.
pub const SEGMENT: &str = "_";

/// Minutes represented by one segment of a live prediction.
pub const MINUTES_PER_SEGMENT: i64 = 5;

/// Hours on the clock face used for timetabled arrivals.
const CLOCK_HOURS: i64 = 12;

/// Longest road drawn in front of the bus.
pub const MAX_SEGMENTS: i64 = 24;

/// Returns the glyph for a bus.
pub fn bus_glyph(double_decker: bool) -> &'static str {
    if double_decker {
        DOUBLE_DECKER
    } else {
        SINGLE_DECKER
    }
}

/// Number of road segments between the stop and the bus.
///
/// Live predictions use one segment per five minutes. Timetabled times use
/// whole hours until the arrival, wrapped to a twelve hour clock; a time
/// earlier than `now` is taken to be tomorrow. "Due" and unreadable times
/// are zero. The result never exceeds [`MAX_SEGMENTS`].
pub fn segments(eta: Eta, now: NaiveDateTime) -> i64 {
    match eta {
        Eta::InMinutes(minutes) => (minutes / MINUTES_PER_SEGMENT).min(MAX_SEGMENTS),
        Eta::At { hour, minute } => {
            let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else {
                return 0;
            };

            let mut target = now.date().and_time(time);
            if target < now {
                target += Duration::days(1);
            }

            target.signed_duration_since(now).num_hours() % CLOCK_HOURS
        }
        Eta::Due | Eta::Unknown => 0,
    }
}

/// Render the road for an arrival.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use timetravel::domain::Eta;
/// use timetravel::render::road;
///
/// let now = NaiveDate::from_ymd_opt(2026, 10, 16)
///     .unwrap()
///     .and_hms_opt(15, 4, 0)
///     .unwrap();
///
/// assert_eq!(road(Eta::Due, false, now), "🚏🚌");
/// assert_eq!(road(Eta::InMinutes(12), true, now), "🚏__🚍_____");
/// ```
pub fn road(eta: Eta, double_decker: bool, now: NaiveDateTime) -> String {
    let bus = bus_glyph(double_decker);
    let segments = segments(eta, now);

    if segments <= 0 {
        return format!("{STOP}{bus}");
    }

    // Timetabled arrivals are too far off to show the stop
    let (stop, trailing) = match eta {
        Eta::InMinutes(_) => (STOP, MINUTES_PER_SEGMENT),
        _ => ("", CLOCK_HOURS),
    };

    format!(
        "{stop}{}{bus}{}",
        SEGMENT.repeat(segments as usize),
        SEGMENT.repeat(trailing as usize)
    )
}
