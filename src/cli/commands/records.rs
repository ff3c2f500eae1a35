//! Event commands - `record` and `history` for mortality, weighings, feed and environment.
//!
//! Every `record` resolves the batch by code first, so the id handed to the
//! store always comes from a fresh lookup.

use crate::{
    cli::{
        AppContext, ConsumptionCommand, EnvironmentCommand, MortalityCommand, WeighingCommand,
        commands::{date_or_today, resolve_batch},
        format::{format_grams, format_kilograms, format_percent, format_table},
    },
    core::{
        consumption, environment,
        events::{EventKind, EventSeries, events_for_batch},
        mortality, weighing,
    },
    errors::Result,
};
use chrono::Local;

async fn history(ctx: &AppContext, kind: EventKind, code: &str) -> Result<String> {
    let batch = resolve_batch(ctx, code).await?;
    let series = events_for_batch(&ctx.database, kind, batch.id).await?;
    Ok(format!(
        "{} history for batch '{}'\n{}",
        capitalize(kind.as_str()),
        batch.code,
        format_series(&series)
    ))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Runs a `mortality` subcommand.
pub async fn mortality(ctx: &AppContext, command: MortalityCommand) -> Result<String> {
    match command {
        MortalityCommand::Record {
            code,
            quantity,
            cause,
            date,
        } => {
            let cause = ctx.catalog.mortality_cause(&cause)?;
            let batch = resolve_batch(ctx, &code).await?;
            let event = mortality::record_mortality(
                &ctx.database,
                batch.id,
                date_or_today(date),
                quantity,
                cause,
            )
            .await?;
            Ok(format!(
                "✅ Recorded {} dead ({}) for batch '{}' on {}",
                event.quantity, event.cause, batch.code, event.date
            ))
        }
        MortalityCommand::History { code } => history(ctx, EventKind::Mortality, &code).await,
    }
}

/// Runs a `weighing` subcommand.
pub async fn weighing(ctx: &AppContext, command: WeighingCommand) -> Result<String> {
    match command {
        WeighingCommand::Record {
            code,
            weight,
            uniformity,
            date,
        } => {
            let batch = resolve_batch(ctx, &code).await?;
            let weighing = weighing::record_weighing(
                &ctx.database,
                batch.id,
                date_or_today(date),
                weight,
                uniformity,
            )
            .await?;
            Ok(format!(
                "✅ Recorded weighing for batch '{}' on {}: {} at {} uniformity",
                batch.code,
                weighing.date,
                format_grams(weighing.average_weight),
                format_percent(weighing.uniformity)
            ))
        }
        WeighingCommand::History { code } => history(ctx, EventKind::Weighing, &code).await,
    }
}

/// Runs a `consumption` subcommand.
pub async fn consumption(ctx: &AppContext, command: ConsumptionCommand) -> Result<String> {
    match command {
        ConsumptionCommand::Record {
            code,
            feed_type,
            quantity,
            date,
        } => {
            let feed_type = ctx.catalog.feed_type(&feed_type)?;
            let batch = resolve_batch(ctx, &code).await?;
            let entry = consumption::record_consumption(
                &ctx.database,
                batch.id,
                date_or_today(date),
                feed_type,
                quantity,
            )
            .await?;
            Ok(format!(
                "✅ Recorded {} of '{}' for batch '{}' on {}",
                format_kilograms(entry.quantity),
                entry.feed_type,
                batch.code,
                entry.date
            ))
        }
        ConsumptionCommand::History { code } => {
            history(ctx, EventKind::Consumption, &code).await
        }
    }
}

/// Runs an `environment` subcommand.
pub async fn environment(ctx: &AppContext, command: EnvironmentCommand) -> Result<String> {
    match command {
        EnvironmentCommand::Record {
            code,
            temperature,
            humidity,
            at,
        } => {
            let batch = resolve_batch(ctx, &code).await?;
            let recorded_at = at.unwrap_or_else(|| Local::now().naive_local());
            let reading = environment::record_environment_reading(
                &ctx.database,
                batch.id,
                recorded_at,
                temperature,
                humidity,
            )
            .await?;
            Ok(format!(
                "✅ Recorded {:.1} °C / {} RH for batch '{}' at {}",
                reading.temperature,
                format_percent(reading.humidity),
                batch.code,
                reading.recorded_at
            ))
        }
        EnvironmentCommand::History { code } => {
            history(ctx, EventKind::Environment, &code).await
        }
    }
}

/// Renders any event series as a table.
#[must_use]
pub fn format_series(series: &EventSeries) -> String {
    const EMPTY: &str = "No records yet.";
    match series {
        EventSeries::Mortality(rows) => {
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|r| vec![r.date.to_string(), r.cause.clone(), r.total_deaths.to_string()])
                .collect();
            format_table(&["Date", "Cause", "Deaths"], &rows, EMPTY)
        }
        EventSeries::Weighing(rows) => {
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|w| {
                    vec![
                        w.date.to_string(),
                        format_grams(w.average_weight),
                        format_percent(w.uniformity),
                    ]
                })
                .collect();
            format_table(&["Date", "Avg weight", "Uniformity"], &rows, EMPTY)
        }
        EventSeries::Consumption(rows) => {
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|c| {
                    vec![
                        c.date.to_string(),
                        c.feed_type.clone(),
                        format_kilograms(c.quantity),
                    ]
                })
                .collect();
            format_table(&["Date", "Feed type", "Quantity"], &rows, EMPTY)
        }
        EventSeries::Environment(rows) => {
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|e| {
                    vec![
                        e.recorded_at.format("%Y-%m-%d %H:%M").to_string(),
                        format!("{:.1} °C", e.temperature),
                        format_percent(e.humidity),
                    ]
                })
                .collect();
            format_table(&["Recorded at", "Temperature", "Humidity"], &rows, EMPTY)
        }
    }
}
