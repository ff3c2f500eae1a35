//! Environment reading entity - House temperature and humidity at a point in time.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Environment reading database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "environment_readings")]
pub struct Model {
    /// Unique identifier for the reading
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the batch housed at the time of the reading
    pub batch_id: i64,
    /// When the reading was taken
    pub recorded_at: DateTime,
    /// Temperature in degrees Celsius
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

/// Defines relationships between `EnvironmentReading` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each reading belongs to one batch
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
