//! Scraping of the arrivals board HTML.
//!
//! The board is a plain HTML table. The first row holds the column
//! headings (service, destination, time, low floor) and every following
//! row is one bus. Columns are located by heading text so a reordered
//! table still parses; unrecognised headings fall back to the historical
//! column order.

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::domain::BusArrival;

use super::error::ParseError;

/// Historical column order: service, destination, time, low floor.
const FALLBACK_COLUMNS: [usize; 4] = [0, 1, 2, 3];

/// Column indices for each field of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Columns {
    service: usize,
    destination: usize,
    time: usize,
    low_floor: usize,
}

impl Columns {
    /// Locate columns from the heading row.
    ///
    /// A field whose heading is not recognised keeps its historical
    /// position if no other field claimed it, and otherwise takes the
    /// first unclaimed column. No two fields share a column.
    fn from_headings(headings: &[String]) -> Self {
        let find = |is_heading: fn(&str) -> bool| {
            headings
                .iter()
                .position(|h| is_heading(h.to_ascii_lowercase().as_str()))
        };

        let mut columns = [
            find(|h| matches!(h, "service" | "bus" | "route")),
            find(|h| matches!(h, "to" | "destination")),
            find(|h| matches!(h, "time" | "due" | "departs")),
            find(|h| h.contains("low floor")),
        ];

        let mut claimed: Vec<usize> = columns.iter().flatten().copied().collect();
        for (column, fallback) in columns.iter_mut().zip(FALLBACK_COLUMNS) {
            if column.is_none() && !claimed.contains(&fallback) {
                *column = Some(fallback);
                claimed.push(fallback);
            }
        }

        let mut next = 0;
        let mut unclaimed = || {
            while claimed.contains(&next) {
                next += 1;
            }
            next += 1;
            next - 1
        };
        let [service, destination, time, low_floor] =
            columns.map(|column| column.unwrap_or_else(&mut unclaimed));

        Self {
            service,
            destination,
            time,
            low_floor,
        }
    }
}

fn selector(css: &'static str) -> Result<Selector, ParseError> {
    Selector::parse(css).map_err(|_| ParseError::Selector(css))
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Parse an arrivals board page into bus arrivals, in board order.
///
/// Every row after the heading row produces exactly one arrival. Cells
/// are read leniently: a non-numeric service becomes 0, a missing cell is
/// read as empty text, and only a low-floor cell reading "Yes" marks the
/// bus as a single decker.
///
/// # Examples
///
/// ```
/// use timetravel::acis::parse_departures;
///
/// let html = "<table>\
///     <tr><th>Service</th><th>To</th><th>Time</th><th>Low Floor</th></tr>\
///     <tr><td>12</td><td>TownCentre</td><td>Due</td><td>Yes</td></tr>\
///     </table>";
///
/// let buses = parse_departures(html).unwrap();
/// assert_eq!(buses.len(), 1);
/// assert_eq!(buses[0].to_string(), "Bus 12 going to TownCentre is Due");
/// assert!(!buses[0].double_decker);
/// ```
pub fn parse_departures(html: &str) -> Result<Vec<BusArrival>, ParseError> {
    let document = Html::parse_document(html);

    let table_selector = selector("table")?;
    let row_selector = selector("tr")?;
    let cell_selector = selector("th, td")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or(ParseError::MissingTable)?;

    let mut rows = table
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).map(cell_text).collect::<Vec<_>>());

    let Some(headings) = rows.next() else {
        return Ok(Vec::new());
    };
    let columns = Columns::from_headings(&headings);

    Ok(rows.map(|cells| row_to_arrival(&cells, columns)).collect())
}

fn row_to_arrival(cells: &[String], columns: Columns) -> BusArrival {
    let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");

    let service_text = cell(columns.service);
    let service = service_text.parse().unwrap_or_else(|_| {
        debug!(service = service_text, "non-numeric service number, using 0");
        0
    });

    // Only an explicit low-floor "Yes" means a single decker
    let double_decker = !cell(columns.low_floor).eq_ignore_ascii_case("yes");

    BusArrival::new(
        service,
        cell(columns.destination),
        cell(columns.time),
        double_decker,
    )
}
