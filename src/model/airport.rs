//! Airport: the named endpoints of a flight.

/// Where a flight is headed.
///
/// `destination_name` is the place passengers are told they are flying to.
/// `arrival_name` is the airport the flight lands at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    destination_name: String,
    arrival_name: String,
}

impl Airport {
    pub fn new(destination_name: impl Into<String>, arrival_name: impl Into<String>) -> Self {
        Self {
            destination_name: destination_name.into(),
            arrival_name: arrival_name.into(),
        }
    }

    pub fn destination_name(&self) -> &str {
        &self.destination_name
    }

    pub fn arrival_name(&self) -> &str {
        &self.arrival_name
    }
}
