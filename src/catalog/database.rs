//! Motor catalog - root catalog structure.

use heapless::Vec;
use serde::Deserialize;

use crate::error::{CatalogError, Error, Result};

use super::motor::Motor;

/// Maximum number of motors in a catalog.
pub const MAX_CATALOG_MOTORS: usize = 64;

/// Root catalog structure from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MotorCatalog {
    /// Known motor definitions.
    #[serde(default)]
    pub motors: Vec<Motor, MAX_CATALOG_MOTORS>,
}

impl MotorCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a motor definition.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::CatalogFull` if the catalog is at capacity.
    pub fn add(&mut self, motor: Motor) -> Result<()> {
        self.motors
            .push(motor)
            .map_err(|_| Error::Catalog(CatalogError::CatalogFull))
    }

    /// Motors whose designation matches, ignoring ASCII case.
    pub fn by_designation<'a>(&'a self, designation: &'a str) -> impl Iterator<Item = &'a Motor> + 'a {
        self.motors
            .iter()
            .filter(move |m| m.designation.as_str().eq_ignore_ascii_case(designation))
    }

    /// Motor with the given thrust-curve digest.
    pub fn by_digest(&self, digest: &str) -> Option<&Motor> {
        self.motors
            .iter()
            .find(|m| m.digest.as_ref().is_some_and(|d| d.as_str() == digest))
    }

    /// Get the number of motors.
    pub fn len(&self) -> usize {
        self.motors.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.motors.is_empty()
    }

    /// Iterate motor definitions.
    pub fn iter(&self) -> impl Iterator<Item = &Motor> {
        self.motors.iter()
    }
}
