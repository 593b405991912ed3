//! CLI interface for the departures board.
//!
//! Board commands read a manifest passed with `--board` and print to stdout.
//! `fare` needs no board.

mod format;

use std::io;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::fare::{FareSchedule, calculate_airfare};
use crate::manifest::load_board;
use crate::model::DepartureBoard;
use crate::render::{print_departures, render_departure_summary};

use format::{format_board_header, format_fare_breakdown};

/// Departures: show an airport departures board.
#[derive(Debug, Parser)]
#[command(name = "departures", after_long_help = USAGE_HELP)]
pub struct Cli {
    /// Board manifest (TOML). Required for list, summary, and alert.
    #[arg(long, global = true)]
    board: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

const USAGE_HELP: &str = r#"Examples:
  departures --board jfk.toml summary
  departures --board jfk.toml alert
  departures fare --bags 2 --distance 2000 --travelers 3

Manifest:
  current-airport = "JFK"

  [[flights]]
  departure = "KL 6966"
  destination = "Los Angeles"
  arrival = "LAX"
  scheduled = "2026-10-18T17:26:00Z"
  terminal = "4"
  gate = "B12"
  status = "scheduled""#;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every flight's raw record, one per line.
    List,

    /// Print a passenger-friendly summary of every flight.
    ///
    /// Unknown times are left out and unassigned terminals show as TBD.
    Summary,

    /// Send each flight's passengers the message for its status.
    Alert,

    /// Calculate the airfare for a booking.
    Fare {
        /// Number of checked bags.
        #[arg(long, default_value_t = 0)]
        bags: u32,

        /// Distance flown, in miles.
        #[arg(long, default_value_t = 0)]
        distance: u32,

        /// Number of travelers on the booking.
        #[arg(long, default_value_t = 1)]
        travelers: u32,
    },
}

/// Run the CLI, returning an error message on failure.
pub fn run(config: &Config) -> Result<(), String> {
    let cli = Cli::parse();

    match cli.command {
        Command::List => {
            let board = require_board(cli.board.as_deref())?;
            cmd_list(&board)
        }
        Command::Summary => {
            let board = require_board(cli.board.as_deref())?;
            cmd_summary(config, &board)
        }
        Command::Alert => {
            let board = require_board(cli.board.as_deref())?;
            cmd_alert(config, &board)
        }
        Command::Fare {
            bags,
            distance,
            travelers,
        } => cmd_fare(bags, distance, travelers),
    }
}

/// Require that `--board` was provided and load it.
fn require_board(path: Option<&Path>) -> Result<DepartureBoard, String> {
    let path = path.ok_or("this command requires --board <file>")?;
    load_board(path).map_err(|e| e.to_string())
}

fn cmd_list(board: &DepartureBoard) -> Result<(), String> {
    print_departures(board, &mut io::stdout().lock())
        .map_err(|e| format!("failed to write departures: {e}"))
}

fn cmd_summary(config: &Config, board: &DepartureBoard) -> Result<(), String> {
    let tz = config.time_zone()?;

    if board.is_empty() {
        println!("No departures from {}", board.current_airport());
        return Ok(());
    }

    println!("{}", format_board_header(board));
    render_departure_summary(board, &tz, &mut io::stdout().lock())
        .map_err(|e| format!("failed to write summary: {e}"))?;
    Ok(())
}

fn cmd_alert(config: &Config, board: &DepartureBoard) -> Result<(), String> {
    let tz = config.time_zone()?;
    board
        .alert_passengers(config.missing_terminal, &tz, &mut io::stdout().lock())
        .map_err(|e| format!("failed to write alerts: {e}"))?;
    eprintln!("Alerted passengers on {} flight(s)", board.len());
    Ok(())
}

fn cmd_fare(bags: u32, distance: u32, travelers: u32) -> Result<(), String> {
    let total = calculate_airfare(bags, distance, travelers).map_err(|e| e.to_string())?;

    println!("{total}");
    eprintln!(
        "{}",
        format_fare_breakdown(&FareSchedule::STANDARD, bags, distance, travelers, total)
    );
    Ok(())
}
