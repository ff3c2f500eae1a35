//! Feed consumption entity - Kilograms of a feed type delivered to a batch.
//!
//! Feed types follow the growth phases (`"Pré-inicial"`, `"Inicial"`,
//! `"Crescimento"`, `"Final"`) but are stored as free text.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Feed consumption database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feed_consumptions")]
pub struct Model {
    /// Unique identifier for the entry
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the batch that was fed
    pub batch_id: i64,
    /// Day of consumption
    pub date: Date,
    /// Feed formulation
    pub feed_type: String,
    /// Quantity in kilograms
    pub quantity: f64,
}

/// Defines relationships between `FeedConsumption` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each entry belongs to one batch
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
