/// Database connection and schema management
pub mod database;

/// Catalog of selectable categories loaded from granja.toml
pub mod catalog;
