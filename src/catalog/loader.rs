//! Catalog loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{truncated, CatalogError, Error, Result};

use super::MotorCatalog;

/// Load a motor catalog from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Example
///
/// ```rust,ignore
/// use motor_mount::load_catalog;
///
/// let catalog = load_catalog("motors.toml")?;
/// ```
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<MotorCatalog> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Catalog(CatalogError::IoError(truncated(&e.to_string()))))?;

    parse_catalog(&content)
}

/// Parse a motor catalog from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_catalog(content: &str) -> Result<MotorCatalog> {
    let catalog: MotorCatalog = toml::from_str(content)
        .map_err(|e| Error::Catalog(CatalogError::ParseError(truncated(e.message()))))?;

    // Validate the catalog
    super::validation::validate_catalog(&catalog)?;

    Ok(catalog)
}
