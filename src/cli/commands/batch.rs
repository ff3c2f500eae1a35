//! Batch commands - `register`, `list` and `show`.

use crate::{
    cli::{AppContext, BatchCommand, commands, format::format_table},
    core::batch::{self, NewBatch},
    entities::batch as batch_entity,
    errors::Result,
};

/// Runs a `batch` subcommand.
pub async fn run(ctx: &AppContext, command: BatchCommand) -> Result<String> {
    match command {
        BatchCommand::Register {
            code,
            quantity,
            line,
            entry_date,
        } => {
            let genetic_line = ctx.catalog.genetic_line(&line)?.to_string();
            let registered = batch::register_batch(
                &ctx.database,
                NewBatch {
                    code,
                    entry_date: commands::date_or_today(entry_date),
                    initial_quantity: quantity,
                    genetic_line,
                },
            )
            .await?;
            Ok(format!(
                "✅ Batch '{}' registered: {} {} birds housed on {}",
                registered.code,
                registered.initial_quantity,
                registered.genetic_line,
                registered.entry_date
            ))
        }
        BatchCommand::List => {
            let batches = batch::list_batches(&ctx.database).await?;
            Ok(format_batches(&batches))
        }
        BatchCommand::Show { code } => {
            let found = commands::resolve_batch(ctx, &code).await?;
            Ok(format_batches(std::slice::from_ref(&found)))
        }
    }
}

/// Renders batches as a table.
#[must_use]
pub fn format_batches(batches: &[batch_entity::Model]) -> String {
    let rows: Vec<Vec<String>> = batches
        .iter()
        .map(|b| {
            vec![
                b.code.clone(),
                b.entry_date.to_string(),
                b.initial_quantity.to_string(),
                b.genetic_line.clone(),
                b.status.clone(),
            ]
        })
        .collect();
    format_table(
        &["Code", "Entry date", "Birds", "Line", "Status"],
        &rows,
        "No batches registered.",
    )
}
