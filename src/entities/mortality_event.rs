//! Mortality entity - Birds lost from a batch on a given day, with the cause.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Mortality event database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "mortality_events")]
pub struct Model {
    /// Unique identifier for the event
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the batch the birds belonged to
    pub batch_id: i64,
    /// Day the deaths were recorded
    pub date: Date,
    /// Number of dead birds, always positive
    pub quantity: i64,
    /// Categorical cause (e.g., "Doença", "Acidentes")
    pub cause: String,
}

/// Defines relationships between `MortalityEvent` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each event belongs to one batch
    #[sea_orm(
        belongs_to = "super::batch::Entity",
        from = "Column::BatchId",
        to = "super::batch::Column::Id"
    )]
    Batch,
}

impl Related<super::batch::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Batch.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
