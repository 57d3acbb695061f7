//! Tests for CLI subcommand parsing.

use airport_console::{Cli, Command};
use chrono::NaiveDate;
use clap::Parser;

#[test]
fn no_subcommand_defaults_to_the_root_page() {
    let cli = Cli::try_parse_from(["airport_console"]).unwrap();
    assert!(cli.command.is_none());
    assert_eq!(cli.base_url.as_str(), "http://127.0.0.1:8000/api/");
    assert_eq!(cli.timeout_seconds, 10);
}

#[test]
fn airports_accepts_an_optional_filter() {
    let cli = Cli::try_parse_from(["airport_console", "airports", "--filter", "camp"]).unwrap();
    match cli.command {
        Some(Command::Airports { filter }) => assert_eq!(filter.as_deref(), Some("camp")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn airport_takes_a_positional_iata_code() {
    let cli = Cli::try_parse_from(["airport_console", "airport", "GRU"]).unwrap();
    match cli.command {
        Some(Command::Airport { iata }) => assert_eq!(iata, "GRU"),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn log_takes_a_numeric_id() {
    let cli = Cli::try_parse_from(["airport_console", "log", "7"]).unwrap();
    match cli.command {
        Some(Command::Log { id }) => assert_eq!(id, 7),
        other => panic!("unexpected command: {other:?}"),
    }

    assert!(Cli::try_parse_from(["airport_console", "log", "seven"]).is_err());
}

#[test]
fn flights_parses_dates_and_keeps_return_date_optional() {
    let cli = Cli::try_parse_from([
        "airport_console",
        "flights",
        "--from",
        "GRU",
        "--to",
        "JFK",
        "--departure-date",
        "2024-01-10",
        "--token",
        "secret",
    ])
    .unwrap();
    match cli.command {
        Some(Command::Flights {
            from,
            to,
            departure_date,
            return_date,
            ..
        }) => {
            assert_eq!(from, "GRU");
            assert_eq!(to, "JFK");
            assert_eq!(departure_date, NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
            assert!(return_date.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = Cli::try_parse_from([
        "airport_console",
        "flights",
        "--from",
        "GRU",
        "--to",
        "JFK",
        "--departure-date",
        "2024-01-10",
        "--return-date",
        "2024-01-20",
        "--token",
        "secret",
    ])
    .unwrap();
    match cli.command {
        Some(Command::Flights { return_date, .. }) => {
            assert_eq!(return_date, NaiveDate::from_ymd_opt(2024, 1, 20));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn unknown_subcommands_are_rejected() {
    assert!(Cli::try_parse_from(["airport_console", "teleport"]).is_err());
}

#[test]
fn base_url_is_overridable() {
    let cli = Cli::try_parse_from([
        "airport_console",
        "--base-url",
        "http://backend.internal:9000/api/",
        "logs",
    ])
    .unwrap();
    assert_eq!(cli.base_url.as_str(), "http://backend.internal:9000/api/");
    assert!(matches!(cli.command, Some(Command::Logs)));
}
