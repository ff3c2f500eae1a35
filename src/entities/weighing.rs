//! Weighing entity - Sampled average weight and uniformity of a batch.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Weighing database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "weighings")]
pub struct Model {
    /// Unique identifier for the weighing
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the weighed batch
    pub batch_id: i64,
    /// Day of the weighing
    pub date: Date,
    /// Average bird weight in grams
    pub average_weight: f64,
    /// Share of birds within the target weight band, 0-100
    pub uniformity: f64,
}

/// Defines relationships between Weighing and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each weighing belongs to one batch
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
