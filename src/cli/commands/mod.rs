//! Command implementations organized by dashboard section.

/// Batch registration and listing
pub mod batch;
/// Home summary and per-batch analysis
pub mod dashboard;
/// Staff roster
pub mod employee;
/// Mortality, weighing, consumption and environment entry and history
pub mod records;

use crate::{
    cli::AppContext,
    core,
    entities::batch as batch_entity,
    errors::{Error, Result},
};
use chrono::{Local, NaiveDate};

/// Looks a batch up by the code the user typed.
///
/// # Errors
/// Returns [`Error::BatchNotFound`] carrying the code when nothing matches.
pub async fn resolve_batch(ctx: &AppContext, code: &str) -> Result<batch_entity::Model> {
    core::batch::get_batch_by_code(&ctx.database, code)
        .await?
        .ok_or_else(|| Error::BatchNotFound {
            reference: code.trim().to_string(),
        })
}

/// The given date, or today's local date.
#[must_use]
pub fn date_or_today(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}
