//! Departure board: the flights leaving the current airport.

use super::Flight;

/// An ordered, owned list of departing flights for one airport.
///
/// Flights are only ever appended; iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct DepartureBoard {
    flights: Vec<Flight>,
    current_airport: String,
}

impl DepartureBoard {
    pub fn new(flights: Vec<Flight>, current_airport: impl Into<String>) -> Self {
        Self {
            flights,
            current_airport: current_airport.into(),
        }
    }

    /// Appends a flight to the end of the board. No deduplication.
    pub fn add_flight(&mut self, flight: Flight) {
        self.flights.push(flight);
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn current_airport(&self) -> &str {
        &self.current_airport
    }

    pub fn len(&self) -> usize {
        self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::model::{Airport, FlightStatus};

    fn flight(label: &str) -> Flight {
        Flight::new(
            label,
            Airport::new("Boston", "BOS"),
            None,
            None,
            None,
            FlightStatus::Scheduled,
        )
    }

    #[test]
    fn add_flight_preserves_insertion_order() {
        let mut board = DepartureBoard::new(Vec::new(), "JFK");
        board.add_flight(flight("A"));
        board.add_flight(flight("B"));
        board.add_flight(flight("C"));

        let labels: Vec<&str> = board
            .flights()
            .iter()
            .map(|f| f.departure_label.as_str())
            .collect();
        assert_eq!(labels, ["A", "B", "C"]);
    }

    #[test]
    fn add_flight_keeps_duplicates() {
        let mut board = DepartureBoard::new(vec![flight("A")], "JFK");
        board.add_flight(flight("A"));

        assert_eq!(board.len(), 2);
        assert_eq!(board.flights()[0], board.flights()[1]);
    }

    #[test]
    fn new_board_keeps_airport_and_initial_flights() {
        let board = DepartureBoard::new(vec![flight("A")], "No Airport Determined");

        assert_eq!(board.current_airport(), "No Airport Determined");
        assert_eq!(board.len(), 1);
        assert!(!board.is_empty());
        assert!(DepartureBoard::new(Vec::new(), "JFK").is_empty());
    }
}
