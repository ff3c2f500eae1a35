//! Unified error type for the record store and the command-line front end.

use thiserror::Error;

/// All failures surfaced by `Granja` operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A batch with this code is already registered
    #[error("Batch code '{code}' is already registered")]
    DuplicateBatchCode {
        /// The rejected batch code
        code: String,
    },

    /// The referenced batch does not exist
    #[error("Batch not found: {reference}")]
    BatchNotFound {
        /// Id or code used for the lookup
        reference: String,
    },

    /// A head count that must be strictly positive was not
    #[error("Invalid {field}: {value} (must be greater than zero)")]
    InvalidCount {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// Adding stored counts together exceeded the integer range
    #[error("Total {field} is too large to represent")]
    CountOverflow {
        /// Name of the total that overflowed
        field: &'static str,
    },

    /// A measurement was out of range or not a finite number
    #[error("Invalid {field}: {value}")]
    InvalidMeasurement {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Malformed input that is not a number range problem
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description
        message: String,
    },

    /// Configuration could not be loaded
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description
        message: String,
    },

    /// Underlying database failure
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Filesystem failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
