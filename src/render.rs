//! Text rendering for the departure board.
//!
//! Two views over the same flights: the raw structural dump, and a
//! passenger-facing summary that never leaks an absent value as `None`.

use std::fmt::Write as _;
use std::io::{self, Write};

use jiff::Timestamp;
use jiff::tz::TimeZone;

use crate::model::{DepartureBoard, Flight};

/// Placeholder for a value that has not been decided yet.
pub const TBD: &str = "TBD";

/// Write every flight's `Debug` representation, one per line.
///
/// No unwrapping happens here: absent fields show up as `None`.
pub fn print_departures(board: &DepartureBoard, out: &mut impl Write) -> io::Result<()> {
    for flight in board.flights() {
        writeln!(out, "{flight:?}")?;
    }
    Ok(())
}

/// Build the passenger-facing summary, one newline-terminated line per flight.
///
/// An empty board yields an empty string.
pub fn departure_summary(board: &DepartureBoard, tz: &TimeZone) -> String {
    board
        .flights()
        .iter()
        .enumerate()
        .map(|(i, flight)| summary_line(i + 1, flight, tz))
        .collect()
}

/// Build the summary and also write each line to `out`.
pub fn render_departure_summary(
    board: &DepartureBoard,
    tz: &TimeZone,
    out: &mut impl Write,
) -> io::Result<String> {
    let summary = departure_summary(board, tz);
    out.write_all(summary.as_bytes())?;
    Ok(summary)
}

/// Render a timestamp as a short time of day, e.g. `1:26 PM`.
pub fn short_time(ts: Timestamp, tz: &TimeZone) -> String {
    ts.to_zoned(tz.clone()).strftime("%-I:%M %p").to_string()
}

fn summary_line(number: usize, flight: &Flight, tz: &TimeZone) -> String {
    let mut line = format!(
        "Flight {number}: {} to {} ({})",
        flight.departure_label,
        flight.route.destination_name(),
        flight.route.arrival_name()
    );

    // `write!` into a String cannot fail.
    if let Some(ts) = flight.scheduled_time {
        let _ = write!(line, " | Departure: {}", short_time(ts, tz));
    }
    let _ = write!(
        line,
        " | Terminal: {}",
        flight.terminal.as_deref().unwrap_or(TBD)
    );
    if let Some(gate) = &flight.gate {
        let _ = write!(line, " | Gate: {gate}");
    }
    let _ = writeln!(line, " | Status: {}", flight.status);

    line
}
