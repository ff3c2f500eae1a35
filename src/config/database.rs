//! Database configuration module for `Granja`.
//!
//! This module handles the `SQLite` connection and table creation using `SeaORM`.
//! Tables are generated from the entity definitions with `Schema::create_table_from_entity`,
//! so the on-disk schema always matches the Rust models, and every statement carries
//! `IF NOT EXISTS` so that start-up can run it against an existing database file.

use crate::entities::{
    Batch, Employee, EnvironmentReading, FeedConsumption, MortalityEvent, Weighing,
};
use crate::errors::Result;
use sea_orm::{
    ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema, sea_query::TableCreateStatement,
};
use tracing::{debug, info, instrument};

/// Database used when `DATABASE_URL` is not set. `mode=rwc` lets `SQLite` create the file.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://data/granja.sqlite?mode=rwc";

/// Gets the database URL from the environment or returns the default `SQLite` path.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string())
}

/// Creates the parent directory of a file-backed `SQLite` URL if it is missing.
///
/// In-memory and non-`SQLite` URLs are left alone.
pub fn prepare_sqlite_path(database_url: &str) -> Result<()> {
    let Some(rest) = database_url.strip_prefix("sqlite:") else {
        return Ok(());
    };
    let path = rest.trim_start_matches("//");
    let path = path.split('?').next().unwrap_or_default();
    if path.is_empty() || path.starts_with(":memory:") {
        return Ok(());
    }

    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating database directory {:?}", parent);
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Opens a connection to the database at `database_url`.
///
/// The returned connection is a pool and is meant to live for the whole process;
/// callers share it by reference instead of reconnecting per operation.
#[instrument]
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    debug!("Connecting to database");
    Database::connect(database_url).await.map_err(Into::into)
}

fn create_statement<E: EntityTrait>(schema: &Schema, entity: E) -> TableCreateStatement {
    let mut statement = schema.create_table_from_entity(entity);
    statement.if_not_exists();
    statement
}

/// Creates every table the application needs, skipping the ones that already exist.
///
/// Batches are created first because the four event tables declare foreign keys into it.
#[instrument(skip(db))]
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let statements = [
        create_statement(&schema, Batch),
        create_statement(&schema, MortalityEvent),
        create_statement(&schema, Weighing),
        create_statement(&schema, FeedConsumption),
        create_statement(&schema, EnvironmentReading),
        create_statement(&schema, Employee),
    ];

    for statement in &statements {
        db.execute(builder.build(statement)).await?;
    }

    info!("Database tables ensured");
    Ok(())
}

/// Connects to `database_url` and makes sure the schema is in place.
pub async fn init_database(database_url: &str) -> Result<DatabaseConnection> {
    prepare_sqlite_path(database_url)?;
    let db = create_connection(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        BatchModel, EmployeeModel, EnvironmentReadingModel, FeedConsumptionModel,
        MortalityEventModel, WeighingModel,
    };
    use sea_orm::QuerySelect;

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<BatchModel> = Batch::find().limit(1).all(&db).await?;
        let _: Vec<MortalityEventModel> = MortalityEvent::find().limit(1).all(&db).await?;
        let _: Vec<WeighingModel> = Weighing::find().limit(1).all(&db).await?;
        let _: Vec<FeedConsumptionModel> = FeedConsumption::find().limit(1).all(&db).await?;
        let _: Vec<EnvironmentReadingModel> =
            EnvironmentReading::find().limit(1).all(&db).await?;
        let _: Vec<EmployeeModel> = Employee::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<BatchModel> = Batch::find().limit(1).all(&db).await?;
        Ok(())
    }

    #[test]
    fn test_prepare_sqlite_path_creates_parent() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("granja-test-{}", std::process::id()));
        let url = format!("sqlite://{}/nested/farm.sqlite?mode=rwc", dir.display());

        prepare_sqlite_path(&url)?;
        assert!(dir.join("nested").is_dir());

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[test]
    fn test_prepare_sqlite_path_ignores_memory() -> Result<()> {
        prepare_sqlite_path("sqlite::memory:")?;
        prepare_sqlite_path("postgres://localhost/farm")?;
        Ok(())
    }

    #[tokio::test]
    async fn test_init_database_file_backed() -> Result<()> {
        let dir = std::env::temp_dir().join(format!("granja-file-{}", std::process::id()));
        let url = format!("sqlite://{}/granja.sqlite?mode=rwc", dir.display());

        let db = init_database(&url).await?;
        let _: Vec<BatchModel> = Batch::find().limit(1).all(&db).await?;
        db.close().await?;

        // Reopening an existing file must not fail on table creation
        let db = init_database(&url).await?;
        db.close().await?;

        std::fs::remove_dir_all(&dir)?;
        Ok(())
    }

    #[tokio::test]
    async fn test_init_database_in_memory() -> Result<()> {
        let db = init_database("sqlite::memory:").await?;
        let _: Vec<WeighingModel> = Weighing::find().limit(1).all(&db).await?;
        Ok(())
    }
}
