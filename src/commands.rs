use crate::inspections::backfill;
use crate::tanks::services;
use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use migration::seed as seeders;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigrationStatus;
use std::time::Duration;

pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None)
        .await
        .context("Failed to run migrations")?;
    println!("{} DB migrations complete", style("✔").green());
    Ok(())
}

pub async fn rollback(db: &DatabaseConnection, steps: u32) -> Result<()> {
    Migrator::down(db, Some(steps))
        .await
        .with_context(|| format!("Failed to revert {steps} migration(s)"))?;
    println!("{} Reverted {steps} migration(s)", style("✔").green());
    Ok(())
}

pub async fn status(db: &DatabaseConnection) -> Result<()> {
    let migrations = Migrator::get_migration_with_status(db)
        .await
        .context("Failed to read migration status")?;

    for migration in migrations {
        let marker = match migration.status() {
            MigrationStatus::Applied => style("applied").green(),
            MigrationStatus::Pending => style("pending").yellow(),
        };
        println!("{marker:<8} {}", migration.name());
    }
    Ok(())
}

pub async fn seed(db: &DatabaseConnection) -> Result<()> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(80));

    spinner.set_message("Seeding tank_details...");
    let tanks = seeders::seed_tank_details(db)
        .await
        .context("Failed to seed tank_details")?;

    spinner.set_message("Seeding inspection master data...");
    let master = seeders::seed_inspection_master(db)
        .await
        .context("Failed to seed inspection master data")?;

    spinner.finish_and_clear();
    println!(
        "{} tank_details: {} inserted, {} already present",
        style("✔").green(),
        tanks.inserted,
        tanks.skipped
    );
    println!(
        "{} inspection_job: {} inserted, inspection_sub_job: {} inserted",
        style("✔").green(),
        master.jobs_inserted,
        master.sub_jobs_inserted
    );
    Ok(())
}

pub async fn backfill_sub_jobs(db: &DatabaseConnection, dry_run: bool) -> Result<()> {
    if dry_run {
        let candidates = backfill::count_backfill_candidates(db).await?;
        println!(
            "{} {candidates} inspection_checklist row(s) would receive a sub_job_id",
            style("dry run").cyan()
        );
        return Ok(());
    }

    let updated = backfill::backfill_sub_job_ids(db).await?;
    println!(
        "{} Backfilled sub_job_id on {updated} inspection_checklist row(s)",
        style("✔").green()
    );
    Ok(())
}

pub async fn tanks(db: &DatabaseConnection, tank_number: Option<&str>, json: bool) -> Result<()> {
    let tanks = match tank_number {
        Some(number) => services::find_by_tank_number(db, number)
            .await
            .context("Failed to load tank")?
            .into_iter()
            .collect(),
        None => services::list_tanks(db)
            .await
            .context("Failed to load tanks")?,
    };

    if json {
        println!("{}", services::render_json(&tanks)?);
    } else {
        services::print_table(&tanks);
    }
    Ok(())
}
