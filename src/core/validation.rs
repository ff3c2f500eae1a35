//! Input checks shared by every write path.
//!
//! The store rejects out-of-range values itself instead of trusting the caller,
//! so the same rules hold for the CLI, tests and any future front end.

use crate::errors::{Error, Result};

/// Rejects counts that are zero or negative.
pub fn positive_count(field: &'static str, value: i64) -> Result<i64> {
    if value > 0 {
        Ok(value)
    } else {
        Err(Error::InvalidCount { field, value })
    }
}

/// Rejects NaN and infinities.
pub fn finite(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::InvalidMeasurement { field, value })
    }
}

/// Rejects negative or non-finite quantities. Zero is allowed.
pub fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if finite(field, value)? < 0.0 {
        return Err(Error::InvalidMeasurement { field, value });
    }
    Ok(value)
}

/// Rejects anything outside the closed range `[0, 100]`.
pub fn percentage(field: &'static str, value: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&finite(field, value)?) {
        return Err(Error::InvalidMeasurement { field, value });
    }
    Ok(value)
}

/// Trims `value` and rejects it when nothing is left.
pub fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            message: format!("{field} cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}
