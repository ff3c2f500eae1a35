//! Employee entity - Farm staff roster. Not linked to any batch.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Employee database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "employees")]
pub struct Model {
    /// Unique identifier for the employee
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Full name
    pub name: String,
    /// Job role (e.g., "Tratador", "Veterinário")
    pub role: String,
    /// Hiring date
    pub admission_date: Date,
}

/// Employees have no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
