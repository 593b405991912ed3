//! Departures configuration.
//!
//! Loaded from `~/.departures/config.toml`. Every field is optional and a
//! missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use serde::Deserialize;

use crate::alert::MissingTerminal;

/// Departures configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
    /// IANA time zone for departure times. System zone when unset.
    pub time_zone: Option<String>,

    /// How alerts phrase an unassigned terminal.
    pub missing_terminal: MissingTerminal,
}

impl Config {
    /// Load config from `~/.departures/config.toml`, or defaults if absent.
    pub fn load() -> Result<Self, String> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::warn!("could not determine home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Load config from a specific file. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, String> {
        let contents = match fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(format!("failed to read {}: {e}", path.display())),
        };

        let config: Self = toml::from_str(&contents)
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        // Surface a bad zone name at load time rather than on first render.
        config
            .time_zone()
            .map_err(|e| format!("invalid config at {}: {e}", path.display()))?;

        Ok(config)
    }

    /// The config file path: `~/.departures/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".departures").join("config.toml"))
    }

    /// Resolve the configured time zone.
    pub fn time_zone(&self) -> Result<TimeZone, String> {
        match &self.time_zone {
            Some(name) => {
                TimeZone::get(name).map_err(|e| format!("unknown time zone '{name}': {e}"))
            }
            None => Ok(TimeZone::system()),
        }
    }
}
