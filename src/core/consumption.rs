//! Feed consumption business logic - Kilograms of feed delivered per batch and day.

use crate::{
    core::{batch::require_batch, validation},
    entities::{FeedConsumption, feed_consumption},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use std::collections::BTreeMap;
use tracing::{info, instrument};

/// Records feed delivered to a batch.
///
/// # Errors
/// - [`crate::errors::Error::InvalidMeasurement`] if `quantity` is negative or non-finite
/// - [`crate::errors::Error::Validation`] if `feed_type` is blank
/// - [`crate::errors::Error::BatchNotFound`] if the batch does not exist
#[instrument(skip(db))]
pub async fn record_consumption(
    db: &DatabaseConnection,
    batch_id: i64,
    date: NaiveDate,
    feed_type: &str,
    quantity: f64,
) -> Result<feed_consumption::Model> {
    let feed_type = validation::required_text("feed type", feed_type)?;
    let quantity = validation::non_negative("feed quantity", quantity)?;

    let txn = db.begin().await?;
    require_batch(&txn, batch_id).await?;

    let entry = feed_consumption::ActiveModel {
        batch_id: Set(batch_id),
        date: Set(date),
        feed_type: Set(feed_type),
        quantity: Set(quantity),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        "Recorded consumption_id {} for batch_id {}: {:.2} kg of '{}'",
        entry.id, batch_id, entry.quantity, entry.feed_type
    );
    Ok(entry)
}

/// Feed entries of a batch as stored, ordered by date ascending.
pub async fn consumption_series(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<feed_consumption::Model>> {
    FeedConsumption::find()
        .filter(feed_consumption::Column::BatchId.eq(batch_id))
        .order_by_asc(feed_consumption::Column::Date)
        .order_by_asc(feed_consumption::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Total kilograms of feed delivered to a batch, per feed type, in type order.
#[must_use]
pub fn total_by_feed_type(entries: &[feed_consumption::Model]) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for entry in entries {
        *totals.entry(entry.feed_type.as_str()).or_insert(0.0) += entry.quantity;
    }
    totals
        .into_iter()
        .map(|(feed_type, total)| (feed_type.to_string(), total))
        .collect()
}
