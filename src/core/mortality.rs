//! Mortality business logic - Recording deaths and summarizing them per day and cause.
//!
//! Raw events are append-only. Reports work on [`MortalitySummary`] rows, one per
//! `(date, cause)` pair with the quantities of all matching events added up.

use crate::{
    core::{batch::require_batch, validation},
    entities::{MortalityEvent, mortality_event},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument};

/// Deaths for one batch on one day from one cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MortalitySummary {
    /// Day of the deaths
    pub date: NaiveDate,
    /// Cause shared by every event in the group
    pub cause: String,
    /// Sum of the quantities of the grouped events
    pub total_deaths: i64,
}

/// Records dead birds for a batch.
///
/// The batch is checked inside the same transaction as the insert. Recording the
/// same entry twice stores two rows.
///
/// # Errors
/// - [`crate::errors::Error::InvalidCount`] if `quantity` is not positive
/// - [`crate::errors::Error::Validation`] if `cause` is blank
/// - [`crate::errors::Error::BatchNotFound`] if the batch does not exist
#[instrument(skip(db))]
pub async fn record_mortality(
    db: &DatabaseConnection,
    batch_id: i64,
    date: NaiveDate,
    quantity: i64,
    cause: &str,
) -> Result<mortality_event::Model> {
    let quantity = validation::positive_count("mortality quantity", quantity)?;
    let cause = validation::required_text("mortality cause", cause)?;

    let txn = db.begin().await?;
    require_batch(&txn, batch_id).await?;

    let event = mortality_event::ActiveModel {
        batch_id: Set(batch_id),
        date: Set(date),
        quantity: Set(quantity),
        cause: Set(cause),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!(
        "Recorded mortality_id {} for batch_id {}: {} on {} ({})",
        event.id, batch_id, event.quantity, event.date, event.cause
    );
    Ok(event)
}

/// Retrieves the raw mortality events of a batch, oldest first.
pub async fn list_mortality_events(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<mortality_event::Model>> {
    MortalityEvent::find()
        .filter(mortality_event::Column::BatchId.eq(batch_id))
        .order_by_asc(mortality_event::Column::Date)
        .order_by_asc(mortality_event::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Groups events by `(date, cause)` and sums their quantities.
///
/// The output is ordered by date, then cause.
///
/// # Errors
/// Returns [`Error::CountOverflow`] if a group's total does not fit in an `i64`.
pub fn summarize_mortality(events: &[mortality_event::Model]) -> Result<Vec<MortalitySummary>> {
    let mut groups: BTreeMap<(NaiveDate, &str), i64> = BTreeMap::new();
    for event in events {
        let total = groups.entry((event.date, event.cause.as_str())).or_insert(0);
        *total = total
            .checked_add(event.quantity)
            .ok_or(Error::CountOverflow {
                field: "mortality",
            })?;
    }

    Ok(groups
        .into_iter()
        .map(|((date, cause), total_deaths)| MortalitySummary {
            date,
            cause: cause.to_string(),
            total_deaths,
        })
        .collect())
}

/// Adds up the totals of a mortality summary.
///
/// # Errors
/// Returns [`Error::CountOverflow`] if the sum does not fit in an `i64`.
pub fn total_deaths(summary: &[MortalitySummary]) -> Result<i64> {
    summary
        .iter()
        .try_fold(0_i64, |acc, row| acc.checked_add(row.total_deaths))
        .ok_or(Error::CountOverflow {
            field: "mortality",
        })
}

/// Mortality of a batch grouped per day and cause.
#[instrument(skip(db))]
pub async fn aggregate_mortality(
    db: &DatabaseConnection,
    batch_id: i64,
) -> Result<Vec<MortalitySummary>> {
    let events = list_mortality_events(db, batch_id).await?;
    let summary = summarize_mortality(&events)?;
    debug!(
        "Aggregated {} mortality events into {} rows for batch_id {}",
        events.len(),
        summary.len(),
        batch_id
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    fn event(id: i64, date: NaiveDate, quantity: i64, cause: &str) -> mortality_event::Model {
        mortality_event::Model {
            id,
            batch_id: 1,
            date,
            quantity,
            cause: cause.to_string(),
        }
    }

    #[test]
    fn test_summarize_groups_by_date_and_cause() {
        let d5 = date(2024, 1, 5);
        let d6 = date(2024, 1, 6);
        let events = vec![
            event(1, d6, 1, "Outras"),
            event(2, d5, 3, "Doença"),
            event(3, d5, 4, "Acidentes"),
            event(4, d5, 2, "Doença"),
        ];

        let summary = summarize_mortality(&events).unwrap();

        assert_eq!(
            summary,
            vec![
                MortalitySummary {
                    date: d5,
                    cause: "Acidentes".to_string(),
                    total_deaths: 4,
                },
                MortalitySummary {
                    date: d5,
                    cause: "Doença".to_string(),
                    total_deaths: 5,
                },
                MortalitySummary {
                    date: d6,
                    cause: "Outras".to_string(),
                    total_deaths: 1,
                },
            ]
        );
    }

    #[test]
    fn test_summarize_empty() {
        assert!(summarize_mortality(&[]).unwrap().is_empty());
        assert_eq!(total_deaths(&[]).unwrap(), 0);
    }

    #[tokio::test]
    async fn test_aggregate_mortality_example() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;

        record_mortality(&db, batch.id, date(2024, 1, 5), 3, "Doença").await?;
        record_mortality(&db, batch.id, date(2024, 1, 5), 2, "Doença").await?;

        let summary = aggregate_mortality(&db, batch.id).await?;
        assert_eq!(
            summary,
            vec![MortalitySummary {
                date: date(2024, 1, 5),
                cause: "Doença".to_string(),
                total_deaths: 5,
            }]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_aggregate_ignores_other_batches() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;
        let other = create_test_batch(&db, "L002").await?;

        record_mortality(&db, batch.id, date(2024, 2, 1), 7, "Outras").await?;
        record_mortality(&db, other.id, date(2024, 2, 1), 100, "Outras").await?;

        let summary = aggregate_mortality(&db, batch.id).await?;
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].total_deaths, 7);
        Ok(())
    }

    #[test]
    fn test_summarize_reports_overflowing_group() {
        let d5 = date(2024, 1, 5);
        let events = vec![event(1, d5, i64::MAX, "Doença"), event(2, d5, 1, "Doença")];
        assert!(matches!(
            summarize_mortality(&events),
            Err(Error::CountOverflow { field: "mortality" })
        ));
    }

    #[test]
    fn test_total_deaths_reports_overflow_across_groups() {
        let rows = vec![
            MortalitySummary {
                date: date(2024, 1, 5),
                cause: "Doença".to_string(),
                total_deaths: i64::MAX,
            },
            MortalitySummary {
                date: date(2024, 1, 6),
                cause: "Outras".to_string(),
                total_deaths: 2,
            },
        ];
        assert!(matches!(
            total_deaths(&rows),
            Err(Error::CountOverflow { .. })
        ));
        assert_eq!(total_deaths(&rows[1..]).unwrap(), 2);
    }

    #[tokio::test]
    async fn test_aggregate_overflowing_history_returns_error() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;

        record_mortality(&db, batch.id, date(2024, 1, 5), i64::MAX, "Doença").await?;
        record_mortality(&db, batch.id, date(2024, 1, 5), 1, "Doença").await?;

        let result = aggregate_mortality(&db, batch.id).await;
        assert!(matches!(result, Err(Error::CountOverflow { .. })));

        // Raw rows stay readable
        assert_eq!(list_mortality_events(&db, batch.id).await?.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_entries_are_both_stored() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;

        let first = record_mortality(&db, batch.id, date(2024, 1, 9), 1, "Acidentes").await?;
        let second = record_mortality(&db, batch.id, date(2024, 1, 9), 1, "Acidentes").await?;
        assert_ne!(first.id, second.id);

        let events = list_mortality_events(&db, batch.id).await?;
        assert_eq!(events.len(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_record_mortality_rejects_bad_input() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;

        let zero = record_mortality(&db, batch.id, date(2024, 1, 5), 0, "Doença").await;
        assert!(matches!(zero, Err(Error::InvalidCount { .. })));

        let blank = record_mortality(&db, batch.id, date(2024, 1, 5), 1, "  ").await;
        assert!(matches!(blank, Err(Error::Validation { .. })));

        let orphan = record_mortality(&db, batch.id + 100, date(2024, 1, 5), 1, "Doença").await;
        assert!(matches!(orphan, Err(Error::BatchNotFound { .. })));

        assert!(list_mortality_events(&db, batch.id).await?.is_empty());
        assert!(
            MortalityEvent::find().all(&db).await?.is_empty(),
            "No rows should be written for rejected entries"
        );
        Ok(())
    }
}
