use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "tank-registry",
    version,
    about = "Schema migrations and seed data for the tank inspection database"
)]
pub struct Cli {
    /// Database URL, overrides DB_URL and the DB_* parts from the environment
    #[arg(long, global = true, value_name = "URL")]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Apply all pending migrations
    Migrate,
    /// Revert the most recently applied migrations
    Rollback {
        /// Number of migrations to revert
        #[arg(long, default_value_t = 1)]
        steps: u32,
    },
    /// Show applied and pending migrations
    Status,
    /// Insert the fixed tank rows and inspection master data where missing
    Seed,
    /// Fill inspection_checklist.sub_job_id from inspection_sub_job on (sn, job_id)
    BackfillSubJobs {
        /// Only report how many rows would change
        #[arg(long)]
        dry_run: bool,
    },
    /// List registered tanks
    Tanks {
        /// Show a single tank by its tank number
        #[arg(long, value_name = "TANK_NUMBER")]
        tank_number: Option<String>,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_backfill_dry_run() {
        let cli = Cli::parse_from(["tank-registry", "backfill-sub-jobs", "--dry-run"]);
        assert!(matches!(cli.command, Command::BackfillSubJobs { dry_run: true }));
        assert!(cli.database_url.is_none());
    }

    #[test]
    fn test_parse_global_database_url_after_subcommand() {
        let cli = Cli::parse_from([
            "tank-registry",
            "tanks",
            "--json",
            "--database-url",
            "sqlite::memory:",
        ]);
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(matches!(
            cli.command,
            Command::Tanks { json: true, tank_number: None }
        ));
    }

    #[test]
    fn test_rollback_defaults_to_one_step() {
        let cli = Cli::parse_from(["tank-registry", "rollback"]);
        assert!(matches!(cli.command, Command::Rollback { steps: 1 }));
    }
}
