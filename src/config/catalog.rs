//! Catalog configuration loaded from granja.toml
//!
//! The catalog lists the choices offered when recording data: genetic lines,
//! mortality causes, feed types and employee roles. The record store itself accepts
//! any non-empty text for these fields; the catalog is enforced by the command-line
//! front end, the same place the choices are presented to the user.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Default location of the catalog file
pub const DEFAULT_CATALOG_PATH: &str = "granja.toml";

/// Configuration structure representing the entire granja.toml file
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Breeds accepted when registering a batch
    #[serde(default = "default_genetic_lines")]
    pub genetic_lines: Vec<String>,
    /// Causes accepted when recording mortality
    #[serde(default = "default_mortality_causes")]
    pub mortality_causes: Vec<String>,
    /// Feed formulations accepted when recording consumption
    #[serde(default = "default_feed_types")]
    pub feed_types: Vec<String>,
    /// Roles accepted when adding an employee; empty means any role
    #[serde(default)]
    pub employee_roles: Vec<String>,
}

fn default_genetic_lines() -> Vec<String> {
    vec!["Ross".into(), "Cobb".into(), "Hubbard".into()]
}

fn default_mortality_causes() -> Vec<String> {
    vec!["Doença".into(), "Acidentes".into(), "Outras".into()]
}

fn default_feed_types() -> Vec<String> {
    vec![
        "Pré-inicial".into(),
        "Inicial".into(),
        "Crescimento".into(),
        "Final".into(),
    ]
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            genetic_lines: default_genetic_lines(),
            mortality_causes: default_mortality_causes(),
            feed_types: default_feed_types(),
            employee_roles: Vec::new(),
        }
    }
}

impl Catalog {
    /// Checks `value` against `choices`, ignoring case, and returns the
    /// canonical spelling from the catalog.
    ///
    /// An empty `choices` list accepts anything.
    pub fn resolve<'a>(field: &str, choices: &'a [String], value: &'a str) -> Result<&'a str> {
        if choices.is_empty() {
            return Ok(value);
        }
        let wanted = value.trim().to_lowercase();
        choices
            .iter()
            .find(|choice| choice.to_lowercase() == wanted)
            .map(String::as_str)
            .ok_or_else(|| Error::Validation {
                message: format!(
                    "'{value}' is not a known {field}; expected one of: {}",
                    choices.join(", ")
                ),
            })
    }

    /// Resolves a genetic line against the catalog.
    pub fn genetic_line<'a>(&'a self, value: &'a str) -> Result<&'a str> {
        Self::resolve("genetic line", &self.genetic_lines, value)
    }

    /// Resolves a mortality cause against the catalog.
    pub fn mortality_cause<'a>(&'a self, value: &'a str) -> Result<&'a str> {
        Self::resolve("mortality cause", &self.mortality_causes, value)
    }

    /// Resolves a feed type against the catalog.
    pub fn feed_type<'a>(&'a self, value: &'a str) -> Result<&'a str> {
        Self::resolve("feed type", &self.feed_types, value)
    }

    /// Resolves an employee role against the catalog.
    pub fn employee_role<'a>(&'a self, value: &'a str) -> Result<&'a str> {
        Self::resolve("employee role", &self.employee_roles, value)
    }
}

/// Loads the catalog from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<Catalog> {
    debug!("Loading catalog from {:?}", path.as_ref());
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read catalog file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse catalog file: {e}"),
    })
}

/// Loads the catalog from `GRANJA_CONFIG`, or `./granja.toml` when unset.
///
/// A missing file is not an error: the built-in choices are used instead.
pub fn load_default_catalog() -> Result<Catalog> {
    let path = std::env::var("GRANJA_CONFIG").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    if Path::new(&path).exists() {
        load_catalog(&path)
    } else {
        info!("No catalog file at {path}, using built-in choices");
        Ok(Catalog::default())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let toml_str = r#"
            genetic_lines = ["Ross", "Cobb"]
            mortality_causes = ["Doença", "Calor"]
            employee_roles = ["Tratador"]
        "#;

        let catalog: Catalog = toml::from_str(toml_str).unwrap();
        assert_eq!(catalog.genetic_lines, vec!["Ross", "Cobb"]);
        assert_eq!(catalog.mortality_causes, vec!["Doença", "Calor"]);
        // Missing sections fall back to the built-in list
        assert_eq!(catalog.feed_types, Catalog::default().feed_types);
        assert_eq!(catalog.employee_roles, vec!["Tratador"]);
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let catalog: Catalog = toml::from_str("").unwrap();
        assert_eq!(catalog, Catalog::default());
    }

    #[test]
    fn test_resolve_is_case_insensitive_and_canonical() {
        let catalog = Catalog::default();
        assert_eq!(catalog.genetic_line("ross").unwrap(), "Ross");
        assert_eq!(catalog.feed_type(" Final ").unwrap(), "Final");
    }

    #[test]
    fn test_resolve_folds_accented_capitals() {
        let catalog = Catalog::default();
        assert_eq!(catalog.mortality_cause("DOENÇA").unwrap(), "Doença");
        assert_eq!(catalog.feed_type("PRÉ-INICIAL").unwrap(), "Pré-inicial");
        assert_eq!(catalog.feed_type("pré-inicial").unwrap(), "Pré-inicial");
    }

    #[test]
    fn test_resolve_rejects_unknown_choice() {
        let catalog = Catalog::default();
        let err = catalog.genetic_line("Leghorn").unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_empty_choice_list_accepts_anything() {
        let catalog = Catalog::default();
        assert_eq!(catalog.employee_role("Gerente").unwrap(), "Gerente");
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let result = load_catalog("definitely/not/here.toml");
        assert!(matches!(result, Err(Error::Config { .. })));
    }
}
