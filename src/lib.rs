//! # motor-mount
//!
//! Flight-configuration keyed motor mounts for model rocket designs, with a streaming
//! importer for the motor-mount section of design files.
//!
//! ## Features
//!
//! - **Configuration-keyed binding**: each mount holds one motor instance per flight
//!   configuration, falling back to a default instance
//! - **Forgiving import**: malformed input becomes a [`Warning`], never an abort
//! - **Motor catalogs**: resolve designations against a TOML motor catalog
//! - **no_std compatible**: Model and importer work without the standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use motor_mount::{import_mount_xml, load_catalog, Rocket, WarningSet};
//!
//! let catalog = load_catalog("motors.toml")?;
//! let mut rocket = Rocket::new("Alpha III")?;
//! let tube = rocket.add_mount("Body tube")?;
//!
//! let mut warnings = WarningSet::new();
//! import_mount_xml(&mut rocket, tube, &catalog, xml, &mut warnings)?;
//!
//! for warning in &warnings {
//!     println!("{}", warning);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables TOML catalogs and the XML front-end
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod catalog;
pub mod error;
pub mod import;
pub mod rocket;
pub mod units;
pub mod warning;

/// Maximum number of flight configurations per rocket (and motor instances per mount).
pub const MAX_CONFIGURATIONS: usize = 32;

/// Maximum number of motor mounts per rocket.
pub const MAX_MOUNTS: usize = 8;

// Re-exports for ergonomic API
pub use catalog::{validate_catalog, Motor, MotorCatalog, MotorFinder, MotorQuery, MotorType};
pub use error::{Error, Result};
pub use import::{Attributes, MotorMountHandler, MountSession};
pub use rocket::{
    FlightConfigurationId, FlightConfigurationSet, IgnitionEvent, MotorInstance, MotorMount,
    MountId, Rocket,
};
pub use warning::{Warning, WarningSet, WarningSink};

// File loading (std only)
#[cfg(feature = "std")]
pub use catalog::{load_catalog, parse_catalog};
#[cfg(feature = "std")]
pub use import::import_mount_xml;

// Unit types
pub use units::{Meters, Seconds};
