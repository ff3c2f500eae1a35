//! Batch business logic - Registration and lookup of poultry batches.
//!
//! A batch code is the one value the store guarantees to be unique; registering
//! an existing code is rejected with [`Error::DuplicateBatchCode`] and leaves the
//! table untouched.

use crate::{
    core::validation,
    entities::{Batch, batch},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{PaginatorTrait, QueryOrder, Set, SqlErr, TransactionTrait, prelude::*};
use tracing::{debug, info, instrument, warn};

/// Input for [`register_batch`].
#[derive(Debug, Clone)]
pub struct NewBatch {
    /// Farm-assigned code, trimmed before storage
    pub code: String,
    /// Day the birds were housed
    pub entry_date: NaiveDate,
    /// Number of birds housed, must be positive
    pub initial_quantity: i64,
    /// Breed or strain
    pub genetic_line: String,
}

/// Registers a new batch with status `"active"`.
///
/// The existence check and the insert share one database transaction. A unique
/// violation raised by the insert itself (another writer got there first) is
/// reported the same way as a failed check.
///
/// # Errors
/// - [`Error::Validation`] if the code or genetic line is blank
/// - [`Error::InvalidCount`] if the initial quantity is not positive
/// - [`Error::DuplicateBatchCode`] if the code is already registered
#[instrument(skip(db))]
pub async fn register_batch(db: &DatabaseConnection, new_batch: NewBatch) -> Result<batch::Model> {
    let code = validation::required_text("batch code", &new_batch.code)?;
    let genetic_line = validation::required_text("genetic line", &new_batch.genetic_line)?;
    let initial_quantity =
        validation::positive_count("initial quantity", new_batch.initial_quantity)?;

    let txn = db.begin().await?;

    let existing = Batch::find()
        .filter(batch::Column::Code.eq(code.as_str()))
        .one(&txn)
        .await?;
    if existing.is_some() {
        warn!("Rejected registration: batch code '{code}' already exists");
        return Err(Error::DuplicateBatchCode { code });
    }

    let model = batch::ActiveModel {
        code: Set(code.clone()),
        entry_date: Set(new_batch.entry_date),
        initial_quantity: Set(initial_quantity),
        genetic_line: Set(genetic_line),
        status: Set(batch::STATUS_ACTIVE.to_string()),
        ..Default::default()
    };

    let inserted = match model.insert(&txn).await {
        Ok(inserted) => inserted,
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            warn!("Rejected registration: batch code '{code}' inserted concurrently");
            return Err(Error::DuplicateBatchCode { code });
        }
        Err(err) => return Err(err.into()),
    };

    txn.commit().await?;

    info!(
        "Registered batch_id {} code='{}' with {} birds",
        inserted.id, inserted.code, inserted.initial_quantity
    );
    Ok(inserted)
}

/// Retrieves every batch in registration order.
pub async fn list_batches(db: &DatabaseConnection) -> Result<Vec<batch::Model>> {
    Batch::find()
        .order_by_asc(batch::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a batch by its id, returning None if it does not exist.
pub async fn get_batch_by_id(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Option<batch::Model>> {
    Batch::find_by_id(batch_id).one(db).await.map_err(Into::into)
}

/// Finds a batch by its code. Surrounding whitespace in `code` is ignored.
#[instrument(skip(db))]
pub async fn get_batch_by_code(db: &DatabaseConnection, code: &str) -> Result<Option<batch::Model>> {
    let found = Batch::find()
        .filter(batch::Column::Code.eq(code.trim()))
        .one(db)
        .await?;
    debug!("Batch lookup for '{}': {:?}", code, found.as_ref().map(|b| b.id));
    Ok(found)
}

/// Loads the batch with `batch_id` or fails with [`Error::BatchNotFound`].
///
/// Generic over the connection so that write paths can run it inside their
/// transaction before inserting child rows.
pub async fn require_batch<C>(db: &C, batch_id: i64) -> Result<batch::Model>
where
    C: ConnectionTrait,
{
    Batch::find_by_id(batch_id)
        .one(db)
        .await?
        .ok_or_else(|| {
            warn!("Batch id {batch_id} does not exist");
            Error::BatchNotFound {
                reference: batch_id.to_string(),
            }
        })
}

/// Counts batches whose status is `"active"`. Shown on the home dashboard.
pub async fn count_active_batches(db: &DatabaseConnection) -> Result<u64> {
    Batch::find()
        .filter(batch::Column::Status.eq(batch::STATUS_ACTIVE))
        .count(db)
        .await
        .map_err(Into::into)
}
