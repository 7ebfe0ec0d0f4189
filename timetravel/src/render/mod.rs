//! Terminal rendering of the arrivals board.
//!
//! Arrivals are shown as an aligned table. Each row carries an emoji
//! "road" whose length hints at how far away the bus is, and the time
//! column is coloured by urgency.

mod road;
mod style;
mod table;

pub use road::{
    DOUBLE_DECKER, MAX_SEGMENTS, MINUTES_PER_SEGMENT, SEGMENT, SINGLE_DECKER, STOP, bus_glyph, road,
    segments,
};
pub use style::{Colour, Painter, display_width};
pub use table::{BoardPrinter, Format};
