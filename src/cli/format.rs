//! Output formatting for CLI display.

use crate::fare::{Fare, FareSchedule};
use crate::model::DepartureBoard;

/// Header line above a board listing.
pub(super) fn format_board_header(board: &DepartureBoard) -> String {
    format!(
        "Departures from {} ({})",
        board.current_airport(),
        plural(board.len() as u64, "flight")
    )
}

/// One-line breakdown of how a fare was reached.
pub(super) fn format_fare_breakdown(
    schedule: &FareSchedule,
    checked_bags: u32,
    distance: u32,
    travelers: u32,
    total: Fare,
) -> String {
    format!(
        "{} x {} + {} x {} + {} mi x {} = {total}",
        plural(u64::from(travelers), "traveler"),
        Fare::from_cents(schedule.base_ticket),
        plural(u64::from(checked_bags), "bag"),
        Fare::from_cents(schedule.per_bag),
        distance,
        Fare::from_cents(schedule.per_mile),
    )
}

fn plural(n: u64, noun: &str) -> String {
    if n == 1 {
        format!("{n} {noun}")
    } else {
        format!("{n} {noun}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::fare::calculate_airfare;
    use crate::model::{Airport, Flight, FlightStatus};

    #[test]
    fn header_counts_flights() {
        let mut board = DepartureBoard::new(Vec::new(), "JFK");
        assert_eq!(format_board_header(&board), "Departures from JFK (0 flights)");

        board.add_flight(Flight::new(
            "DL 1",
            Airport::new("Atlanta", "ATL"),
            None,
            None,
            None,
            FlightStatus::Landed,
        ));
        assert_eq!(format_board_header(&board), "Departures from JFK (1 flight)");
    }

    #[test]
    fn fare_breakdown() {
        let total = calculate_airfare(2, 2000, 3).unwrap();
        assert_eq!(
            format_fare_breakdown(&FareSchedule::STANDARD, 2, 2000, 3, total),
            "3 travelers x $100.00 + 2 bags x $25.00 + 2000 mi x $0.10 = $550.00"
        );
    }

    #[test]
    fn fare_breakdown_singular() {
        let total = calculate_airfare(1, 0, 1).unwrap();
        assert_eq!(
            format_fare_breakdown(&FareSchedule::STANDARD, 1, 0, 1, total),
            "1 traveler x $100.00 + 1 bag x $25.00 + 0 mi x $0.10 = $125.00"
        );
    }
}
