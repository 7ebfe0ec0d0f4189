//! Board printing for the terminal.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::domain::{BusArrival, Eta, StopCode};

use super::road::{DOUBLE_DECKER, MINUTES_PER_SEGMENT, SEGMENT, SINGLE_DECKER, STOP, road};
use super::style::{Colour, Painter, display_width, pad};

const HEADINGS: [&str; 5] = ["Bus", "To", "Time", "Emoji", "Double Decker"];

const GUTTER: &str = "  ";

/// How to lay out the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Aligned table with emoji roads and a legend
    #[default]
    Table,
    /// One sentence per bus
    Plain,
}

/// Prints arrivals for a stop.
#[derive(Debug, Clone, Copy)]
pub struct BoardPrinter {
    format: Format,
    painter: Painter,
}

/// Wall clock in the board's "3:04PM" style.
fn kitchen_time(now: NaiveDateTime) -> String {
    now.format("%-I:%M%p").to_string()
}

fn time_colour(eta: Eta) -> Option<Colour> {
    match eta {
        Eta::Due => Some(Colour::Red),
        Eta::InMinutes(_) => Some(Colour::Yellow),
        Eta::At { .. } => Some(Colour::Green),
        Eta::Unknown => None,
    }
}

impl BoardPrinter {
    /// Create a printer. `colour` turns ANSI colours on.
    pub fn new(format: Format, colour: bool) -> Self {
        Self {
            format,
            painter: Painter::new(colour),
        }
    }

    /// Print the board as of `now`.
    pub fn print<W: Write>(
        &self,
        out: &mut W,
        stop: &StopCode,
        arrivals: &[BusArrival],
        now: NaiveDateTime,
    ) -> io::Result<()> {
        match self.format {
            Format::Table => self.print_table(out, stop, arrivals, now),
            Format::Plain => print_plain(out, stop, arrivals, now),
        }
    }

    fn print_table<W: Write>(
        &self,
        out: &mut W,
        stop: &StopCode,
        arrivals: &[BusArrival],
        now: NaiveDateTime,
    ) -> io::Result<()> {
        let heading = format!("Departures for stop {stop} at {}", kitchen_time(now));
        writeln!(out, "{}", self.painter.paint(&heading, Some(Colour::Bold)))?;
        writeln!(out)?;

        if arrivals.is_empty() {
            writeln!(out, "No buses due.")?;
        } else {
            let rows: Vec<[String; 5]> = arrivals
                .iter()
                .map(|bus| {
                    [
                        bus.service.to_string(),
                        bus.destination.clone(),
                        bus.time.to_string(),
                        road(bus.eta(), bus.double_decker, now),
                        if bus.double_decker { "Yes" } else { "No" }.to_string(),
                    ]
                })
                .collect();

            let mut widths = HEADINGS.map(display_width);
            for row in &rows {
                for (width, cell) in widths.iter_mut().zip(row) {
                    *width = (*width).max(display_width(cell));
                }
            }

            let headings = HEADINGS.map(str::to_string);
            self.print_row(out, &headings, &widths, [Some(Colour::Bold); 5])?;

            let rule = widths.map(|w| "-".repeat(w));
            self.print_row(out, &rule, &widths, [None; 5])?;

            for (row, bus) in rows.iter().zip(arrivals) {
                let colours = [None, Some(Colour::Cyan), time_colour(bus.eta()), None, None];
                self.print_row(out, row, &widths, colours)?;
            }
        }

        writeln!(out)?;
        writeln!(
            out,
            "{STOP} stop   {SINGLE_DECKER} single decker (low floor)   {DOUBLE_DECKER} double decker"
        )?;
        writeln!(
            out,
            "each {SEGMENT} is about {MINUTES_PER_SEGMENT} minutes away, or an hour for timetabled times"
        )?;

        Ok(())
    }

    /// Print one aligned row. Padding is measured before colouring so
    /// escape codes do not skew the columns.
    fn print_row<W: Write>(
        &self,
        out: &mut W,
        cells: &[String; 5],
        widths: &[usize; 5],
        colours: [Option<Colour>; 5],
    ) -> io::Result<()> {
        let line = cells
            .iter()
            .zip(widths)
            .zip(colours)
            .map(|((cell, &width), colour)| self.painter.paint(&pad(cell, width), colour))
            .collect::<Vec<_>>()
            .join(GUTTER);

        writeln!(out, "{}", line.trim_end())
    }
}

/// One sentence per bus, under a short heading.
fn print_plain<W: Write>(
    out: &mut W,
    stop: &StopCode,
    arrivals: &[BusArrival],
    now: NaiveDateTime,
) -> io::Result<()> {
    writeln!(out, "Departure information for {stop} at {}", kitchen_time(now))?;
    writeln!(out, "Stop Ref: {stop}")?;
    writeln!(out, "------------------------------------")?;

    for bus in arrivals {
        writeln!(out, "{bus}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(15, 4, 0)
            .unwrap()
    }

    fn stop() -> StopCode {
        StopCode::parse("22001688").unwrap()
    }

    fn arrivals() -> Vec<BusArrival> {
        vec![
            BusArrival::new(12, "TownCentre", "Due", false),
            BusArrival::new(5, "Bus Station", "9", true),
            BusArrival::new(36, "Harrogate", "18:30", true),
        ]
    }

    fn render(printer: BoardPrinter, arrivals: &[BusArrival]) -> String {
        let mut out = Vec::new();
        printer.print(&mut out, &stop(), arrivals, now()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn kitchen_time_format() {
        assert_eq!(kitchen_time(now()), "3:04PM");
    }

    #[test]
    fn table_layout() {
        let text = render(BoardPrinter::new(Format::Table, false), &arrivals());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "Departures for stop 22001688 at 3:04PM");
        assert_eq!(lines[1], "");
        assert_eq!(
            lines[2],
            "Bus  To           Time   Emoji              Double Decker"
        );
        assert_eq!(
            lines[3],
            "---  -----------  -----  -----------------  -------------"
        );
        assert_eq!(lines[4], "12   TownCentre   Due    🚏🚌               No");
        assert_eq!(lines[5], "5    Bus Station  9      🚏_🚍_____         Yes");
        assert_eq!(lines[6], "36   Harrogate    18:30  ___🚍____________  Yes");
    }

    #[test]
    fn table_has_legend() {
        let text = render(BoardPrinter::new(Format::Table, false), &arrivals());

        assert!(text.contains("🚏 stop"));
        assert!(text.contains("🚌 single decker"));
        assert!(text.contains("🚍 double decker"));
    }

    #[test]
    fn empty_board() {
        let text = render(BoardPrinter::new(Format::Table, false), &[]);

        assert!(text.contains("No buses due."));
        assert!(!text.contains("Double Decker"));
    }

    #[test]
    fn colours_destination_and_time() {
        let text = render(BoardPrinter::new(Format::Table, true), &arrivals());

        assert!(text.contains("\x1b[36mTownCentre "));
        assert!(text.contains("\x1b[1;31mDue"));
        assert!(text.contains("\x1b[33m9"));
        assert!(text.contains("\x1b[32m18:30"));
    }

    #[test]
    fn no_escape_codes_without_colour() {
        let text = render(BoardPrinter::new(Format::Table, false), &arrivals());
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn plain_format() {
        let text = render(BoardPrinter::new(Format::Plain, true), &arrivals());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Departure information for 22001688 at 3:04PM",
                "Stop Ref: 22001688",
                "------------------------------------",
                "Bus 12 going to TownCentre is Due",
                "Bus 5 going to Bus Station in 9",
                "Bus 36 going to Harrogate @ 18:30",
            ]
        );
    }
}
