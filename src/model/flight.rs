//! Flight: one row on the departure board.

use jiff::Timestamp;

use super::{Airport, FlightStatus};

/// A single departing flight.
///
/// `scheduled_time` is conventionally absent for cancelled flights.
/// `terminal` absent means not yet assigned. Terminal and gate stay
/// public so an outside process can reassign them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flight {
    /// Free-text departure description, usually the flight designator.
    pub departure_label: String,
    pub route: Airport,
    pub scheduled_time: Option<Timestamp>,
    pub terminal: Option<String>,
    pub gate: Option<String>,
    pub status: FlightStatus,
}

impl Flight {
    pub fn new(
        departure_label: impl Into<String>,
        route: Airport,
        scheduled_time: Option<Timestamp>,
        terminal: Option<String>,
        gate: Option<String>,
        status: FlightStatus,
    ) -> Self {
        Self {
            departure_label: departure_label.into(),
            route,
            scheduled_time,
            terminal,
            gate,
            status,
        }
    }
}
