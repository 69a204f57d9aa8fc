//! Error types for motor-mount library.
//!
//! Provides unified error handling across the motor catalog, the rocket model, and
//! document import. Recoverable import problems are not errors; they are reported as
//! [`Warning`](crate::warning::Warning)s instead.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all motor-mount operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Motor catalog parsing or validation error
    Catalog(CatalogError),
    /// Rocket model operation error
    Rocket(RocketError),
    /// Document-level import error
    Import(ImportError),
}

/// Motor catalog errors.
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Failed to parse TOML catalog
    ParseError(heapless::String<128>),
    /// Motor entry has an empty designation
    EmptyDesignation,
    /// Invalid motor diameter (must be finite and > 0)
    InvalidDiameter {
        /// Motor designation
        designation: heapless::String<32>,
        /// Offending value in meters
        value: f64,
    },
    /// Invalid motor length (must be finite and > 0)
    InvalidLength {
        /// Motor designation
        designation: heapless::String<32>,
        /// Offending value in meters
        value: f64,
    },
    /// Invalid standard delay (must be >= 0)
    InvalidDelay {
        /// Motor designation
        designation: heapless::String<32>,
        /// Offending value in seconds
        value: f64,
    },
    /// Same manufacturer, designation and digest listed twice
    DuplicateMotor(heapless::String<32>),
    /// Catalog capacity exhausted
    CatalogFull,
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Rocket model errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RocketError {
    /// Flight configuration identifier failed validation
    InvalidConfigurationId(heapless::String<64>),
    /// Flight configuration is not registered on the rocket
    UnknownConfiguration(heapless::String<64>),
    /// Mount index does not exist
    UnknownMount(usize),
    /// Too many flight configurations
    TooManyConfigurations,
    /// Too many motor mounts
    TooManyMounts,
    /// Name exceeds the storage capacity
    NameTooLong,
}

/// Document-level import errors.
///
/// These abort an import; everything below markup level is a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum ImportError {
    /// End tag does not match the innermost open element
    MismatchedEnd {
        /// Element that is open
        expected: heapless::String<32>,
        /// End tag that was found
        found: heapless::String<32>,
    },
    /// End tag with no open element
    UnbalancedEnd(heapless::String<32>),
    /// Document ended with elements still open
    UnexpectedEof,
    /// Document has no root element
    MissingRoot,
    /// Nested elements exceed the session's frame capacity
    NestingTooDeep,
    /// Markup syntax error reported by the XML reader (std only)
    #[cfg(feature = "std")]
    Xml(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Catalog(e) => write!(f, "Catalog error: {}", e),
            Error::Rocket(e) => write!(f, "Rocket error: {}", e),
            Error::Import(e) => write!(f, "Import error: {}", e),
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            CatalogError::EmptyDesignation => write!(f, "Motor designation must not be empty"),
            CatalogError::InvalidDiameter { designation, value } => {
                write!(f, "Invalid diameter {} for motor '{}'. Must be > 0", value, designation)
            }
            CatalogError::InvalidLength { designation, value } => {
                write!(f, "Invalid length {} for motor '{}'. Must be > 0", value, designation)
            }
            CatalogError::InvalidDelay { designation, value } => {
                write!(f, "Invalid delay {} for motor '{}'. Must be >= 0", value, designation)
            }
            CatalogError::DuplicateMotor(designation) => {
                write!(f, "Duplicate motor: '{}'", designation)
            }
            CatalogError::CatalogFull => write!(f, "Motor catalog is full"),
            #[cfg(feature = "std")]
            CatalogError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for RocketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RocketError::InvalidConfigurationId(id) => {
                write!(f, "Invalid flight configuration id: '{}'", id)
            }
            RocketError::UnknownConfiguration(id) => {
                write!(f, "Flight configuration '{}' not found", id)
            }
            RocketError::UnknownMount(index) => write!(f, "Motor mount #{} not found", index),
            RocketError::TooManyConfigurations => {
                write!(f, "Too many flight configurations (max {})", crate::MAX_CONFIGURATIONS)
            }
            RocketError::TooManyMounts => {
                write!(f, "Too many motor mounts (max {})", crate::MAX_MOUNTS)
            }
            RocketError::NameTooLong => write!(f, "Name too long"),
        }
    }
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::MismatchedEnd { expected, found } => {
                write!(f, "Expected </{}>, found </{}>", expected, found)
            }
            ImportError::UnbalancedEnd(name) => write!(f, "Unbalanced end tag </{}>", name),
            ImportError::UnexpectedEof => write!(f, "Document ended inside an open element"),
            ImportError::MissingRoot => write!(f, "Document has no root element"),
            ImportError::NestingTooDeep => write!(f, "Elements nested too deeply"),
            #[cfg(feature = "std")]
            ImportError::Xml(msg) => write!(f, "XML error: {}", msg),
        }
    }
}

// Conversion impls
impl From<CatalogError> for Error {
    fn from(e: CatalogError) -> Self {
        Error::Catalog(e)
    }
}

impl From<RocketError> for Error {
    fn from(e: RocketError) -> Self {
        Error::Rocket(e)
    }
}

impl From<ImportError> for Error {
    fn from(e: ImportError) -> Self {
        Error::Import(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for CatalogError {}

#[cfg(feature = "std")]
impl std::error::Error for RocketError {}

#[cfg(feature = "std")]
impl std::error::Error for ImportError {}

/// Copy `s` into a fixed-capacity string, cutting at a char boundary if it does not fit.
pub(crate) fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
