//! Environment business logic - Temperature and humidity readings taken in a batch's house.

use crate::{
    core::{batch::require_batch, validation},
    entities::{EnvironmentReading, environment_reading},
    errors::Result,
};
use chrono::NaiveDateTime;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Records a temperature/humidity reading for a batch.
///
/// No range is enforced beyond rejecting NaN and infinities.
///
/// # Errors
/// - [`crate::errors::Error::InvalidMeasurement`] if either value is non-finite
/// - [`crate::errors::Error::BatchNotFound`] if the batch does not exist
#[instrument(skip(db))]
pub async fn record_environment_reading(
    db: &DatabaseConnection,
    batch_id: i64,
    recorded_at: NaiveDateTime,
    temperature: f64,
    humidity: f64,
) -> Result<environment_reading::Model> {
    let temperature = validation::finite("temperature", temperature)?;
    let humidity = validation::finite("humidity", humidity)?;

    let txn = db.begin().await?;
    require_batch(&txn, batch_id).await?;

    let reading = environment_reading::ActiveModel {
        batch_id: Set(batch_id),
        recorded_at: Set(recorded_at),
        temperature: Set(temperature),
        humidity: Set(humidity),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        "Recorded environment_id {} for batch_id {} at {}: {:.1} °C, {:.1}% RH",
        reading.id, batch_id, reading.recorded_at, reading.temperature, reading.humidity
    );
    Ok(reading)
}

/// Readings of a batch ordered by timestamp ascending.
pub async fn environment_series(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<environment_reading::Model>> {
    EnvironmentReading::find()
        .filter(environment_reading::Column::BatchId.eq(batch_id))
        .order_by_asc(environment_reading::Column::RecordedAt)
        .order_by_asc(environment_reading::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
