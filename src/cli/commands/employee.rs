//! Employee commands - `add` and `list`.

use crate::{
    cli::{AppContext, EmployeeCommand, commands::date_or_today, format::format_table},
    core::employee,
    errors::Result,
};

/// Runs an `employee` subcommand.
pub async fn run(ctx: &AppContext, command: EmployeeCommand) -> Result<String> {
    match command {
        EmployeeCommand::Add {
            name,
            role,
            admitted,
        } => {
            let role = ctx.catalog.employee_role(&role)?;
            let added =
                employee::register_employee(&ctx.database, &name, role, date_or_today(admitted))
                    .await?;
            Ok(format!(
                "✅ Added {} ({}) admitted on {}",
                added.name, added.role, added.admission_date
            ))
        }
        EmployeeCommand::List => {
            let rows: Vec<Vec<String>> = employee::list_employees(&ctx.database)
                .await?
                .into_iter()
                .map(|e| vec![e.name, e.role, e.admission_date.to_string()])
                .collect();
            Ok(format_table(
                &["Name", "Role", "Admitted"],
                &rows,
                "No employees registered.",
            ))
        }
    }
}
