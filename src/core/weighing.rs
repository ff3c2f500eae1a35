//! Weighing business logic - Average weight and uniformity samples per batch.

use crate::{
    core::{batch::require_batch, validation},
    entities::{Weighing, weighing},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Records a weighing for a batch.
///
/// # Errors
/// - [`crate::errors::Error::InvalidMeasurement`] if `average_weight` is negative or
///   `uniformity` falls outside `[0, 100]` (either value non-finite also fails)
/// - [`crate::errors::Error::BatchNotFound`] if the batch does not exist
#[instrument(skip(db))]
pub async fn record_weighing(
    db: &DatabaseConnection,
    batch_id: i64,
    date: NaiveDate,
    average_weight: f64,
    uniformity: f64,
) -> Result<weighing::Model> {
    let average_weight = validation::non_negative("average weight", average_weight)?;
    let uniformity = validation::percentage("uniformity", uniformity)?;

    let txn = db.begin().await?;
    require_batch(&txn, batch_id).await?;

    let weighing = weighing::ActiveModel {
        batch_id: Set(batch_id),
        date: Set(date),
        average_weight: Set(average_weight),
        uniformity: Set(uniformity),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        "Recorded weighing_id {} for batch_id {}: {:.1} g, {:.1}% uniform",
        weighing.id, batch_id, weighing.average_weight, weighing.uniformity
    );
    Ok(weighing)
}

/// Weighings of a batch as stored, ordered by date ascending.
pub async fn weighing_series(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<weighing::Model>> {
    Weighing::find()
        .filter(weighing::Column::BatchId.eq(batch_id))
        .order_by_asc(weighing::Column::Date)
        .order_by_asc(weighing::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
