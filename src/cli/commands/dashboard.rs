//! Dashboard commands - the home summary and the per-batch analysis.

use crate::{
    cli::{
        AppContext,
        commands::{records::format_series, resolve_batch},
        format::format_kilograms,
    },
    core::{analysis, batch, events::EventSeries},
    errors::Result,
};
/// Home page: number of active batches.
pub async fn home(ctx: &AppContext) -> Result<String> {
    let active = batch::count_active_batches(&ctx.database).await?;
    Ok(format!(
        "Farm management system\nActive batches: {active}\n\nRun `granja --help` to see the available sections."
    ))
}

/// Analysis page: mortality, weight and feed series of one batch.
pub async fn analysis(ctx: &AppContext, code: &str) -> Result<String> {
    let batch = resolve_batch(ctx, code).await?;
    let report = analysis::analyze_batch(&ctx.database, batch.id).await?;
    Ok(format_analysis(report))
}

/// Renders a [`analysis::BatchAnalysis`] section by section.
#[must_use]
pub fn format_analysis(report: analysis::BatchAnalysis) -> String {
    let mut lines = vec![
        format!(
            "Analysis for batch '{}' ({}, {} birds housed on {})",
            report.batch.code,
            report.batch.genetic_line,
            report.batch.initial_quantity,
            report.batch.entry_date
        ),
        String::new(),
        format!("Mortality (total {})", report.total_deaths),
        format_series(&EventSeries::Mortality(report.mortality)),
        String::new(),
        "Average weight".to_string(),
        format_series(&EventSeries::Weighing(report.weighings)),
        String::new(),
        "Feed consumption".to_string(),
        format_series(&EventSeries::Consumption(report.consumption)),
    ];
    lines.extend(
        report
            .consumption_by_type
            .iter()
            .map(|(feed_type, total)| format!("  {feed_type}: {}", format_kilograms(*total))),
    );
    lines.join("\n")
}
