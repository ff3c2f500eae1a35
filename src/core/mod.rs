//! Core business logic - framework-agnostic record store and aggregation.
//!
//! Every function takes a `SeaORM` connection and returns the crate `Result`.
//! Nothing here knows about the command-line front end.

/// Per-batch analysis combining the three chartable series
pub mod analysis;
/// Batch registration and lookup
pub mod batch;
/// Feed consumption recording and series
pub mod consumption;
/// Employee roster
pub mod employee;
/// House environment readings
pub mod environment;
/// Unified access to a batch's event series by kind
pub mod events;
/// Mortality recording and aggregation
pub mod mortality;
/// Shared input checks used by the write paths
pub mod validation;
/// Weighing recording and series
pub mod weighing;
