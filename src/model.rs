//! Core data model for the departures board.
//!
//! Plain values: statuses, airports, flights, and the board that owns them.

mod airport;
mod board;
mod flight;
mod status;

pub use airport::Airport;
pub use board::DepartureBoard;
pub use flight::Flight;
pub use status::FlightStatus;
