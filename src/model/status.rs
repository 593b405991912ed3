//! Flight status: where a departure stands right now.

use std::fmt;

use serde::Deserialize;

/// The state of a single flight as shown on the board.
///
/// Closed set. Every consumer matches all six variants explicitly,
/// so a new status forces an update at each display site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlightStatus {
    EnRoute,
    Scheduled,
    Cancelled,
    Delayed,
    Landed,
    Boarding,
}

impl FlightStatus {
    /// Every status, in declaration order.
    #[cfg(test)]
    pub const ALL: [Self; 6] = [
        Self::EnRoute,
        Self::Scheduled,
        Self::Cancelled,
        Self::Delayed,
        Self::Landed,
        Self::Boarding,
    ];

    /// The fixed lowercase label shown to passengers.
    pub fn label(self) -> &'static str {
        match self {
            Self::EnRoute => "en route",
            Self::Scheduled => "scheduled",
            Self::Cancelled => "cancelled",
            Self::Delayed => "delayed",
            Self::Landed => "landed",
            Self::Boarding => "boarding",
        }
    }
}

impl fmt::Display for FlightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
