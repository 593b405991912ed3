//! Board manifests: a departure board described in TOML.
//!
//! ```toml
//! current-airport = "JFK"
//!
//! [[flights]]
//! departure = "KL 6966"
//! destination = "Los Angeles"
//! arrival = "LAX"
//! scheduled = "2026-10-18T17:26:00Z"
//! terminal = "4"
//! gate = "B12"
//! status = "scheduled"
//! ```
//!
//! `scheduled`, `terminal`, and `gate` may be left out.
//! Manifests are only ever read.

use std::{fs, io, path::Path, path::PathBuf};

use jiff::Timestamp;
use serde::Deserialize;

use crate::model::{Airport, DepartureBoard, Flight, FlightStatus};

/// Errors that can occur while loading a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("invalid board at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid board: {0}")]
    Invalid(String),
}

pub type Result<T> = core::result::Result<T, ManifestError>;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Manifest {
    current_airport: String,
    #[serde(default)]
    flights: Vec<FlightEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct FlightEntry {
    departure: String,
    destination: String,
    arrival: String,
    scheduled: Option<Timestamp>,
    terminal: Option<String>,
    gate: Option<String>,
    status: FlightStatus,
}

impl From<FlightEntry> for Flight {
    fn from(entry: FlightEntry) -> Self {
        Flight::new(
            entry.departure,
            Airport::new(entry.destination, entry.arrival),
            entry.scheduled,
            entry.terminal,
            entry.gate,
            entry.status,
        )
    }
}

/// Read a board manifest from disk.
pub fn load_board(path: &Path) -> Result<DepartureBoard> {
    let contents = fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let manifest: Manifest = toml::from_str(&contents).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let board = build_board(manifest)?;

    tracing::info!(
        path = %path.display(),
        airport = board.current_airport(),
        flights = board.len(),
        "loaded board"
    );
    Ok(board)
}

/// Flights keep their file order.
fn build_board(manifest: Manifest) -> Result<DepartureBoard> {
    if manifest.current_airport.trim().is_empty() {
        return Err(ManifestError::Invalid(
            "current-airport must not be empty".to_string(),
        ));
    }

    let mut board = DepartureBoard::new(Vec::new(), manifest.current_airport);
    for entry in manifest.flights {
        if entry.status == FlightStatus::Cancelled && entry.scheduled.is_some() {
            tracing::debug!(departure = %entry.departure, "cancelled flight still has a scheduled time");
        }
        board.add_flight(entry.into());
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn parse_board(contents: &str) -> Result<DepartureBoard> {
        let manifest = toml::from_str(contents).map_err(|source| ManifestError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        build_board(manifest)
    }

    const SAMPLE: &str = r#"
        current-airport = "JFK"

        [[flights]]
        departure = "KL 6966"
        destination = "Los Angeles"
        arrival = "LAX"
        terminal = "4"
        status = "cancelled"

        [[flights]]
        departure = "B6 586"
        destination = "Rochester"
        arrival = "ROC"
        scheduled = "2026-10-18T13:26:00Z"
        gate = "5"
        status = "en-route"
    "#;

    #[test]
    fn parses_flights_in_order() {
        let board = parse_board(SAMPLE).unwrap();

        assert_eq!(board.current_airport(), "JFK");
        assert_eq!(board.len(), 2);

        let first = &board.flights()[0];
        assert_eq!(first.departure_label, "KL 6966");
        assert_eq!(first.route.destination_name(), "Los Angeles");
        assert_eq!(first.route.arrival_name(), "LAX");
        assert!(first.scheduled_time.is_none());
        assert_eq!(first.terminal.as_deref(), Some("4"));
        assert!(first.gate.is_none());
        assert_eq!(first.status, FlightStatus::Cancelled);

        let second = &board.flights()[1];
        assert_eq!(
            second.scheduled_time,
            Some("2026-10-18T13:26:00Z".parse().unwrap())
        );
        assert!(second.terminal.is_none());
        assert_eq!(second.status, FlightStatus::EnRoute);
    }

    #[test]
    fn board_without_flights() {
        let board = parse_board(r#"current-airport = "No Airport Determined""#).unwrap();
        assert!(board.is_empty());
    }

    #[test]
    fn empty_airport_rejected() {
        let err = parse_board(r#"current-airport = "  ""#).unwrap_err();
        assert!(matches!(err, ManifestError::Invalid(_)));
    }

    #[test]
    fn unknown_status_rejected() {
        let err = parse_board(
            r#"
            current-airport = "JFK"
            [[flights]]
            departure = "X"
            destination = "Y"
            arrival = "Z"
            status = "diverted"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[test]
    fn load_board_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.toml");
        fs::write(&path, "current-airport = 3").unwrap();

        let err = load_board(&path).unwrap_err();

        assert!(matches!(err, ManifestError::Parse { .. }));
        assert!(err.to_string().contains("board.toml"));
    }

    #[test]
    fn load_board_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = load_board(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn load_board_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("board.toml");
        fs::write(&path, SAMPLE).unwrap();

        let board = load_board(&path).unwrap();
        assert_eq!(board.len(), 2);
    }
}
