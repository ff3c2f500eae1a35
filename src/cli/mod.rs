//! CLI layer - Command-line interface over the record store
//!
//! One subcommand per section of the farm dashboard: home, batches, mortality,
//! weighings, consumption, environment, employees and the per-batch analysis.
//! Commands resolve batches by code, check categorical input against the
//! [`Catalog`], call into [`crate::core`] and return the text to print.

/// Command implementations grouped by section
pub mod commands;
/// Plain-text table and unit formatting
pub mod format;

use crate::{config::catalog::Catalog, errors::Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use sea_orm::DatabaseConnection;

/// Shared data available to all commands.
/// Holds the database connection and the loaded catalog.
pub struct AppContext {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
    /// Allowed choices for categorical fields
    pub catalog: Catalog,
}

impl AppContext {
    /// Creates a new `AppContext` from an open connection and a catalog.
    #[must_use]
    pub const fn new(database: DatabaseConnection, catalog: Catalog) -> Self {
        Self { database, catalog }
    }
}

/// Poultry batch records: mortality, weighings, feed and environment.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Database URL; overrides `DATABASE_URL`
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    /// Section to run
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level sections.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the dashboard summary
    Home,
    /// Register and inspect batches
    #[command(subcommand)]
    Batch(BatchCommand),
    /// Record and review mortality
    #[command(subcommand)]
    Mortality(MortalityCommand),
    /// Record and review weighings
    #[command(subcommand)]
    Weighing(WeighingCommand),
    /// Record and review feed consumption
    #[command(subcommand)]
    Consumption(ConsumptionCommand),
    /// Record and review house temperature and humidity
    #[command(subcommand)]
    Environment(EnvironmentCommand),
    /// Manage the staff roster
    #[command(subcommand)]
    Employee(EmployeeCommand),
    /// Show mortality, weight and feed series of a batch
    Analysis {
        /// Batch code
        code: String,
    },
}

/// `batch` subcommands.
#[derive(Debug, Subcommand)]
pub enum BatchCommand {
    /// Register a new batch
    Register {
        /// Unique batch code (e.g., "L001")
        code: String,
        /// Number of birds housed
        #[arg(long)]
        quantity: i64,
        /// Genetic line (e.g., "Ross")
        #[arg(long)]
        line: String,
        /// Entry date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        entry_date: Option<NaiveDate>,
    },
    /// List every registered batch
    List,
    /// Show one batch
    Show {
        /// Batch code
        code: String,
    },
}

/// `mortality` subcommands.
#[derive(Debug, Subcommand)]
pub enum MortalityCommand {
    /// Record dead birds
    Record {
        /// Batch code
        code: String,
        /// Number of dead birds
        #[arg(long)]
        quantity: i64,
        /// Cause of death
        #[arg(long)]
        cause: String,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show deaths per day and cause
    History {
        /// Batch code
        code: String,
    },
}

/// `weighing` subcommands.
#[derive(Debug, Subcommand)]
pub enum WeighingCommand {
    /// Record a weighing
    Record {
        /// Batch code
        code: String,
        /// Average weight in grams
        #[arg(long)]
        weight: f64,
        /// Uniformity in percent (0-100)
        #[arg(long)]
        uniformity: f64,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show weight evolution
    History {
        /// Batch code
        code: String,
    },
}

/// `consumption` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConsumptionCommand {
    /// Record feed delivered
    Record {
        /// Batch code
        code: String,
        /// Feed type (e.g., "Inicial")
        #[arg(long)]
        feed_type: String,
        /// Quantity in kilograms
        #[arg(long)]
        quantity: f64,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show feed deliveries
    History {
        /// Batch code
        code: String,
    },
}

/// `environment` subcommands.
#[derive(Debug, Subcommand)]
pub enum EnvironmentCommand {
    /// Record a reading
    Record {
        /// Batch code
        code: String,
        /// Temperature in °C
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        /// Relative humidity in percent
        #[arg(long)]
        humidity: f64,
        /// Timestamp (YYYY-MM-DDTHH:MM:SS), defaults to now
        #[arg(long)]
        at: Option<NaiveDateTime>,
    },
    /// Show readings
    History {
        /// Batch code
        code: String,
    },
}

/// `employee` subcommands.
#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// Add an employee
    Add {
        /// Full name
        name: String,
        /// Job role
        #[arg(long)]
        role: String,
        /// Admission date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        admitted: Option<NaiveDate>,
    },
    /// List the roster
    List,
}

/// Runs `command` and returns the text to show the user.
pub async fn execute(ctx: &AppContext, command: Command) -> Result<String> {
    match command {
        Command::Home => commands::dashboard::home(ctx).await,
        Command::Batch(cmd) => commands::batch::run(ctx, cmd).await,
        Command::Mortality(cmd) => commands::records::mortality(ctx, cmd).await,
        Command::Weighing(cmd) => commands::records::weighing(ctx, cmd).await,
        Command::Consumption(cmd) => commands::records::consumption(ctx, cmd).await,
        Command::Environment(cmd) => commands::records::environment(ctx, cmd).await,
        Command::Employee(cmd) => commands::employee::run(ctx, cmd).await,
        Command::Analysis { code } => commands::dashboard::analysis(ctx, &code).await,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_batch_register() {
        let cli = Cli::try_parse_from([
            "granja",
            "batch",
            "register",
            "L001",
            "--quantity",
            "1000",
            "--line",
            "Ross",
            "--entry-date",
            "2024-01-01",
        ])
        .unwrap();

        match cli.command {
            Command::Batch(BatchCommand::Register {
                code,
                quantity,
                line,
                entry_date,
            }) => {
                assert_eq!(code, "L001");
                assert_eq!(quantity, 1000);
                assert_eq!(line, "Ross");
                assert_eq!(entry_date, NaiveDate::from_ymd_opt(2024, 1, 1));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_negative_temperature_and_global_url() {
        let cli = Cli::try_parse_from([
            "granja",
            "environment",
            "record",
            "L001",
            "--temperature",
            "-2.5",
            "--humidity",
            "80",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
        assert!(matches!(
            cli.command,
            Command::Environment(EnvironmentCommand::Record { temperature, .. }) if temperature < 0.0
        ));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let result = Cli::try_parse_from([
            "granja",
            "mortality",
            "record",
            "L001",
            "--quantity",
            "1",
            "--cause",
            "Outras",
            "--date",
            "05/01/2024",
        ]);
        assert!(result.is_err());
    }
}
