//! Batch entity - A cohort of birds housed together and tracked as one unit.
//!
//! Batches are the root of the data model. Every mortality, weighing, feed and
//! environment record points back to one batch through `batch_id`.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Status assigned to every newly registered batch
pub const STATUS_ACTIVE: &str = "active";

/// Batch database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "batches")]
pub struct Model {
    /// Unique identifier for the batch
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Farm-assigned batch code (e.g., "L001"), unique across all batches
    #[sea_orm(unique)]
    pub code: String,
    /// Day the birds were housed
    pub entry_date: Date,
    /// Number of birds housed on the entry date
    pub initial_quantity: i64,
    /// Breed or strain (e.g., "Ross", "Cobb")
    pub genetic_line: String,
    /// Lifecycle status, `"active"` on registration
    pub status: String,
}

/// Defines relationships between Batch and its event tables
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One batch has many mortality events
    #[sea_orm(has_many = "super::mortality_event::Entity")]
    MortalityEvents,
    /// One batch has many weighings
    #[sea_orm(has_many = "super::weighing::Entity")]
    Weighings,
    /// One batch has many feed consumption entries
    #[sea_orm(has_many = "super::feed_consumption::Entity")]
    FeedConsumptions,
    /// One batch has many environment readings
    #[sea_orm(has_many = "super::environment_reading::Entity")]
    EnvironmentReadings,
}

impl Related<super::mortality_event::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MortalityEvents.def()
    }
}

impl Related<super::weighing::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Weighings.def()
    }
}

impl Related<super::feed_consumption::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FeedConsumptions.def()
    }
}

impl Related<super::environment_reading::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EnvironmentReadings.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
