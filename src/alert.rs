//! Passenger alerts: one status-specific message per flight.

use std::io::{self, Write};

use jiff::tz::TimeZone;
use serde::Deserialize;

use crate::model::{DepartureBoard, Flight, FlightStatus};
use crate::render::{TBD, short_time};

/// What to tell passengers when their terminal is not assigned yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MissingTerminal {
    /// Say `TBD` where the terminal would go.
    #[default]
    Tbd,

    /// Say `TBD` and send them to the information desk.
    InformationDesk,
}

const INFORMATION_DESK: &str = " Please see the nearest information desk for more details.";

impl DepartureBoard {
    /// One alert per flight, in board order.
    pub fn alerts(&self, policy: MissingTerminal, tz: &TimeZone) -> Vec<String> {
        self.flights()
            .iter()
            .map(|flight| alert_for(flight, policy, tz))
            .collect()
    }

    /// Write every flight's alert to `out`, one per line.
    ///
    /// Reads the board only; flight state is never touched.
    pub fn alert_passengers(
        &self,
        policy: MissingTerminal,
        tz: &TimeZone,
        out: &mut impl Write,
    ) -> io::Result<()> {
        for alert in self.alerts(policy, tz) {
            writeln!(out, "{alert}")?;
        }
        Ok(())
    }
}

/// The message for a single flight, keyed on its own status.
pub fn alert_for(flight: &Flight, policy: MissingTerminal, tz: &TimeZone) -> String {
    let destination = flight.route.destination_name();
    let terminal = flight.terminal.as_deref().unwrap_or(TBD);

    let message = match flight.status {
        FlightStatus::Cancelled => {
            format!("We're sorry your flight to {destination} was canceled, here is a $500 voucher")
        }
        FlightStatus::EnRoute => "Your flight is on time.".to_string(),
        FlightStatus::Delayed => "Your flight is delayed.".to_string(),
        FlightStatus::Landed => "Your flight has landed.".to_string(),
        FlightStatus::Scheduled => {
            let time = flight
                .scheduled_time
                .map_or_else(|| TBD.to_string(), |ts| short_time(ts, tz));
            format!(
                "Your flight to {destination} is scheduled to depart at {time} from terminal: {terminal}"
            )
        }
        FlightStatus::Boarding => format!(
            "Your flight is boarding, please head to terminal: {terminal} immediately. \
             The doors are closing soon."
        ),
    };

    let names_terminal = matches!(
        flight.status,
        FlightStatus::Scheduled | FlightStatus::Boarding
    );
    if names_terminal && policy == MissingTerminal::InformationDesk && flight.terminal.is_none() {
        message + INFORMATION_DESK
    } else {
        message
    }
}
