//! Motor catalog module for motor-mount.
//!
//! Provides motor definitions, the catalog that holds them, and the finder that
//! resolves motor descriptions from design files against it. Catalogs load from
//! TOML files (with `std` feature) or are built programmatically.

mod database;
mod finder;
#[cfg(feature = "std")]
mod loader;
mod motor;
mod validation;

pub use database::{MotorCatalog, MAX_CATALOG_MOTORS};
pub use finder::{MotorFinder, MotorQuery, DIMENSION_TOLERANCE};
pub use motor::{Motor, MotorType, MAX_LABEL_LEN, MAX_STANDARD_DELAYS};
pub use validation::validate_catalog;

#[cfg(feature = "std")]
pub use loader::{load_catalog, parse_catalog};
