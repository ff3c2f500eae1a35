//! Batch analysis - The three chartable series of one batch gathered together.
//!
//! This backs the "Analyses" view: mortality per day and cause, weight evolution
//! and feed consumption per type. No husbandry ratios are derived here.

use crate::{
    core::{batch, consumption, mortality, weighing},
    entities::{batch as batch_entity, feed_consumption, weighing as weighing_entity},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use tracing::instrument;

/// Everything shown for a batch on the analysis page.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchAnalysis {
    /// The batch being analysed
    pub batch: batch_entity::Model,
    /// Deaths grouped per day and cause
    pub mortality: Vec<mortality::MortalitySummary>,
    /// Sum of `mortality` totals
    pub total_deaths: i64,
    /// Weighings by date
    pub weighings: Vec<weighing_entity::Model>,
    /// Feed entries by date
    pub consumption: Vec<feed_consumption::Model>,
    /// Kilograms per feed type
    pub consumption_by_type: Vec<(String, f64)>,
}

/// Builds the analysis for `batch_id`.
///
/// # Errors
/// - [`Error::BatchNotFound`] if the batch does not exist
/// - [`Error::CountOverflow`] if the death total does not fit in an `i64`
#[instrument(skip(db))]
pub async fn analyze_batch(db: &DatabaseConnection, batch_id: i64) -> Result<BatchAnalysis> {
    let batch = batch::get_batch_by_id(db, batch_id)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            reference: batch_id.to_string(),
        })?;

    let mortality = mortality::aggregate_mortality(db, batch_id).await?;
    let total_deaths = mortality::total_deaths(&mortality)?;
    let weighings = weighing::weighing_series(db, batch_id).await?;
    let consumption = consumption::consumption_series(db, batch_id).await?;
    let consumption_by_type = consumption::total_by_feed_type(&consumption);

    Ok(BatchAnalysis {
        batch,
        mortality,
        total_deaths,
        weighings,
        consumption,
        consumption_by_type,
    })
}
