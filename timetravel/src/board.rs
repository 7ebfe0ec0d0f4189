//! One-shot and realtime board display.

use std::convert::Infallible;
use std::io::Write;
use std::time::Duration;

use chrono::Local;
use tracing::debug;

use crate::acis::AcisClient;
use crate::domain::StopCode;
use crate::error::Error;
use crate::render::BoardPrinter;

/// Clear the screen and move the cursor home.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Fetch the board once and print it.
pub async fn show<W: Write>(
    client: &AcisClient,
    stop: &StopCode,
    printer: BoardPrinter,
    out: &mut W,
) -> Result<(), Error> {
    let arrivals = client.get_arrivals(stop).await?;
    printer.print(out, stop, &arrivals, Local::now().naive_local())?;
    out.flush()?;
    Ok(())
}

/// Redraw the board every `interval` until a fetch fails.
///
/// Only returns on error. The screen is cleared after each successful
/// fetch, so a failure leaves the last board visible above the error.
pub async fn watch<W: Write>(
    client: &AcisClient,
    stop: &StopCode,
    printer: BoardPrinter,
    interval: Duration,
    out: &mut W,
) -> Result<Infallible, Error> {
    loop {
        let arrivals = client.get_arrivals(stop).await?;

        write!(out, "{CLEAR_SCREEN}")?;
        printer.print(out, stop, &arrivals, Local::now().naive_local())?;
        out.flush()?;

        debug!(?interval, "waiting for next refresh");
        tokio::time::sleep(interval).await;
    }
}
