//! Unified access to the event series of a batch.
//!
//! Front ends pick a kind of event and get back the rows that belong on its chart:
//! mortality already grouped per day and cause, the other kinds as stored.

use crate::{
    core::{consumption, environment, mortality, weighing},
    entities::{environment_reading, feed_consumption, weighing as weighing_entity},
    errors::{Error, Result},
};
use sea_orm::DatabaseConnection;
use std::{fmt, str::FromStr};
use tracing::{debug, instrument};

/// The kinds of per-batch events the store records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Deaths, grouped per day and cause
    Mortality,
    /// Average weight and uniformity samples
    Weighing,
    /// Feed deliveries
    Consumption,
    /// Temperature and humidity readings
    Environment,
}

impl EventKind {
    /// Every kind, in menu order.
    pub const ALL: [Self; 4] = [
        Self::Mortality,
        Self::Weighing,
        Self::Consumption,
        Self::Environment,
    ];

    /// Stable lowercase name used on the command line and in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mortality => "mortality",
            Self::Weighing => "weighing",
            Self::Consumption => "consumption",
            Self::Environment => "environment",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Validation {
                message: format!("unknown event kind '{s}'"),
            })
    }
}

/// Rows returned by [`events_for_batch`], one variant per [`EventKind`].
#[derive(Debug, Clone, PartialEq)]
pub enum EventSeries {
    /// Grouped mortality
    Mortality(Vec<mortality::MortalitySummary>),
    /// Weighings by date
    Weighing(Vec<weighing_entity::Model>),
    /// Feed entries by date
    Consumption(Vec<feed_consumption::Model>),
    /// Readings by timestamp
    Environment(Vec<environment_reading::Model>),
}

impl EventSeries {
    /// Kind of event held by this series.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::Mortality(_) => EventKind::Mortality,
            Self::Weighing(_) => EventKind::Weighing,
            Self::Consumption(_) => EventKind::Consumption,
            Self::Environment(_) => EventKind::Environment,
        }
    }

    /// Number of rows in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Mortality(rows) => rows.len(),
            Self::Weighing(rows) => rows.len(),
            Self::Consumption(rows) => rows.len(),
            Self::Environment(rows) => rows.len(),
        }
    }

    /// True when the batch has no events of this kind.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fetches the events of `kind` for a batch, ordered by date.
///
/// An unknown `batch_id` simply yields an empty series.
#[instrument(skip(db))]
pub async fn events_for_batch(
    db: &DatabaseConnection,
    kind: EventKind,
    batch_id: i64,
) -> Result<EventSeries> {
    let series = match kind {
        EventKind::Mortality => {
            EventSeries::Mortality(mortality::aggregate_mortality(db, batch_id).await?)
        }
        EventKind::Weighing => EventSeries::Weighing(weighing::weighing_series(db, batch_id).await?),
        EventKind::Consumption => {
            EventSeries::Consumption(consumption::consumption_series(db, batch_id).await?)
        }
        EventKind::Environment => {
            EventSeries::Environment(environment::environment_series(db, batch_id).await?)
        }
    };
    debug!("Fetched {} {} rows for batch_id {}", series.len(), kind, batch_id);
    Ok(series)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn test_event_kind_parsing() {
        assert_eq!("mortality".parse::<EventKind>().unwrap(), EventKind::Mortality);
        assert_eq!(" Weighing ".parse::<EventKind>().unwrap(), EventKind::Weighing);
        assert!("feeding".parse::<EventKind>().is_err());
        for kind in EventKind::ALL {
            assert_eq!(kind.to_string().parse::<EventKind>().unwrap(), kind);
        }
    }

    #[tokio::test]
    async fn test_events_for_batch_dispatches_by_kind() -> Result<()> {
        let (db, batch) = setup_with_batch().await?;
        let day = date(2024, 1, 5);

        mortality::record_mortality(&db, batch.id, day, 3, "Doença").await?;
        mortality::record_mortality(&db, batch.id, day, 2, "Doença").await?;
        weighing::record_weighing(&db, batch.id, day, 210.0, 88.0).await?;
        consumption::record_consumption(&db, batch.id, day, "Inicial", 40.0).await?;
        consumption::record_consumption(&db, batch.id, day, "Inicial", 41.0).await?;

        let mortality_rows = events_for_batch(&db, EventKind::Mortality, batch.id).await?;
        assert_eq!(mortality_rows.kind(), EventKind::Mortality);
        match mortality_rows {
            EventSeries::Mortality(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].total_deaths, 5);
            }
            other => panic!("unexpected series {other:?}"),
        }

        assert_eq!(events_for_batch(&db, EventKind::Weighing, batch.id).await?.len(), 1);
        // Consumption is not aggregated
        assert_eq!(
            events_for_batch(&db, EventKind::Consumption, batch.id).await?.len(),
            2
        );
        assert!(events_for_batch(&db, EventKind::Environment, batch.id)
            .await?
            .is_empty());
        Ok(())
    }
}
