//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the farm tables and their relationships.
//! Every child record belongs to exactly one batch.

pub mod batch;
pub mod employee;
pub mod environment_reading;
pub mod feed_consumption;
pub mod mortality_event;
pub mod weighing;

// Re-export specific types to avoid conflicts
pub use batch::{Column as BatchColumn, Entity as Batch, Model as BatchModel};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use environment_reading::{
    Column as EnvironmentReadingColumn, Entity as EnvironmentReading,
    Model as EnvironmentReadingModel,
};
pub use feed_consumption::{
    Column as FeedConsumptionColumn, Entity as FeedConsumption, Model as FeedConsumptionModel,
};
pub use mortality_event::{
    Column as MortalityEventColumn, Entity as MortalityEvent, Model as MortalityEventModel,
};
pub use weighing::{Column as WeighingColumn, Entity as Weighing, Model as WeighingModel};
