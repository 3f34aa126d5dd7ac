use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use crate::error::ProcessingError;

#[derive(Parser, Debug)]
#[command(name = "railcar-trips")]
#[command(about = "Derive railcar trips from uploaded release/placement event files")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the schema and load the reference cities and event codes
    Migrate,
    /// Process a CSV file of equipment events and store the resulting trips
    Upload {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// List every stored trip ordered by start time
    Trips,
    /// List the stored events of one piece of equipment
    Events {
        #[arg(value_name = "EQUIPMENT_ID")]
        equipment_id: String,
    },
    /// List the event code dictionary
    Codes,
}

/// Body reported to the caller for a bad-input failure.
pub fn error_body(err: &ProcessingError) -> serde_json::Value {
    match err {
        ProcessingError::Upload(reason) => json!({ "error": reason }),
        other => json!({ "error": format!("Invalid CSV format: {}", other) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_upload_command() {
        let args = Args::try_parse_from(["railcar-trips", "upload", "events.csv"]).unwrap();
        match args.command {
            Command::Upload { file } => assert_eq!(file, PathBuf::from("events.csv")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_events_requires_equipment_id() {
        assert!(Args::try_parse_from(["railcar-trips", "events"]).is_err());
        let args = Args::try_parse_from(["railcar-trips", "events", "EQ1"]).unwrap();
        assert!(matches!(args.command, Command::Events { equipment_id } if equipment_id == "EQ1"));
    }

    #[test]
    fn test_error_bodies() {
        let body = error_body(&ProcessingError::upload("Only .csv files are supported."));
        assert_eq!(body["error"], "Only .csv files are supported.");

        let body = error_body(&ProcessingError::invalid_format("CSV file is empty or missing header."));
        assert_eq!(body["error"], "Invalid CSV format: CSV file is empty or missing header.");
    }
}
