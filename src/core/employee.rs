//! Employee business logic - The farm staff roster.

use crate::{
    core::validation,
    entities::{Employee, employee},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use tracing::{info, instrument};

/// Adds an employee to the roster.
///
/// # Errors
/// Returns [`crate::errors::Error::Validation`] if `name` or `role` is blank.
#[instrument(skip(db))]
pub async fn register_employee(
    db: &DatabaseConnection,
    name: &str,
    role: &str,
    admission_date: NaiveDate,
) -> Result<employee::Model> {
    let employee = employee::ActiveModel {
        name: Set(validation::required_text("employee name", name)?),
        role: Set(validation::required_text("employee role", role)?),
        admission_date: Set(admission_date),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!("Registered employee_id {} '{}'", employee.id, employee.name);
    Ok(employee)
}

/// Retrieves the roster ordered alphabetically by name.
pub async fn list_employees(db: &DatabaseConnection) -> Result<Vec<employee::Model>> {
    Employee::find()
        .order_by_asc(employee::Column::Name)
        .order_by_asc(employee::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}
