mod cli;
mod commands;
mod common;
mod config;

mod inspections;
mod tanks;

use crate::cli::{Cli, Command};
use crate::config::Config;
use anyhow::Context;
use clap::Parser;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing/logging, RUST_LOG overrides the default level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();

    let db_url = match cli.database_url {
        Some(url) => url,
        None => {
            let config = Config::from_env()?;
            tracing::debug!("Loaded configuration for {} deployment", config.deployment);
            config.db_url
        }
    };

    let mut options = ConnectOptions::new(db_url);
    options.sqlx_logging(false);
    let db: DatabaseConnection = Database::connect(options)
        .await
        .context("Could not connect to the database")?;
    db.ping().await.context("Database did not answer ping")?;
    tracing::info!("Connected to the database");

    match cli.command {
        Command::Migrate => commands::migrate(&db).await,
        Command::Rollback { steps } => commands::rollback(&db, steps).await,
        Command::Status => commands::status(&db).await,
        Command::Seed => commands::seed(&db).await,
        Command::BackfillSubJobs { dry_run } => commands::backfill_sub_jobs(&db, dry_run).await,
        Command::Tanks { tank_number, json } => {
            commands::tanks(&db, tank_number.as_deref(), json).await
        }
    }
}
