//! Shared test utilities for `Granja`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test batches with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::batch::{self, NewBatch},
    entities,
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all database tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Shorthand for a calendar date in tests.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Registers a test batch with sensible defaults.
///
/// # Defaults
/// * `entry_date`: 2024-01-01
/// * `initial_quantity`: 1000
/// * `genetic_line`: "Ross"
pub async fn create_test_batch(
    db: &DatabaseConnection,
    code: &str,
) -> Result<entities::batch::Model> {
    batch::register_batch(
        db,
        NewBatch {
            code: code.to_string(),
            entry_date: date(2024, 1, 1),
            initial_quantity: 1000,
            genetic_line: "Ross".to_string(),
        },
    )
    .await
}

/// Sets up a complete test environment with batch "L001".
/// Returns (db, batch) for common test scenarios.
pub async fn setup_with_batch() -> Result<(DatabaseConnection, entities::batch::Model)> {
    let db = setup_test_db().await?;
    let batch = create_test_batch(&db, "L001").await?;
    Ok((db, batch))
}
