mod cli;
mod config;
mod db;
mod error;
mod models;
mod processor;

use clap::Parser;
use cli::{Args, Command};
use config::AppConfig;
use error::ProcessingError;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Load config
    let config = AppConfig::load()?;

    // Init logging, stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(&config.log_level)
        .with_writer(std::io::stderr)
        .init();

    match run(args.command, &config).await {
        Ok(()) => Ok(()),
        Err(e) => match e.downcast_ref::<ProcessingError>() {
            Some(pe) if pe.is_invalid_input() => {
                error!("Rejected upload: {}", pe);
                println!("{}", cli::error_body(pe));
                std::process::exit(2);
            }
            _ => {
                error!("Unexpected error: {:#}", e);
                Err(e)
            }
        },
    }
}

async fn run(command: Command, config: &AppConfig) -> anyhow::Result<()> {
    let pool = db::init_pool(&config.database_url, config.db_max_connections).await?;
    info!("Connected to database");

    match command {
        Command::Migrate => {
            db::run_migrations(&pool).await?;
            info!("Migrations applied");
        }
        Command::Upload { file } => {
            let result =
                processor::upload::handle_upload(&pool, &file, &config.upload_limits()).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Trips => {
            info!("Fetching all Trips");
            let trips = db::repository::fetch_all_trips(&pool).await?;
            println!("{}", serde_json::to_string_pretty(&trips)?);
        }
        Command::Events { equipment_id } => {
            info!("Fetching Equipment events for {}", equipment_id);
            let events = db::repository::fetch_events_for_equipment(&pool, &equipment_id).await?;
            println!("{}", serde_json::to_string_pretty(&events)?);
        }
        Command::Codes => {
            let codes = db::repository::load_event_codes(&pool).await?;
            println!("{}", serde_json::to_string_pretty(&codes)?);
        }
    }

    Ok(())
}
