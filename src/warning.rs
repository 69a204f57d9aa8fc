//! Non-fatal import warnings.
//!
//! Malformed or unrecognized input never aborts an import. Each skipped fragment is
//! reported through a [`WarningSink`] and the model simply lacks that data.

use core::fmt;

use heapless::{String, Vec};

use crate::error::truncated;

/// Maximum number of distinct warnings kept by a [`WarningSet`].
pub const MAX_WARNINGS: usize = 32;

/// Capacity of quoted input text in a warning; matches the captured element content.
pub const MAX_QUOTED_LEN: usize = crate::import::MAX_CONTENT_LEN;

/// A recoverable problem encountered while importing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Element not recognized in its context; the element and its subtree were skipped.
    UnknownElement(String<MAX_QUOTED_LEN>),
    /// `configid` missing or invalid on `<motor>` or `<ignitionconfiguration>`.
    IllegalMotorSpecification,
    /// Ignition event text does not name a known event.
    UnknownIgnitionEvent(String<MAX_QUOTED_LEN>),
    /// Ignition delay is not a number.
    IllegalIgnitionDelay,
    /// Motor overhang is not a number.
    IllegalOverhang,
    /// Motor type text does not name a known type.
    UnknownMotorType(String<MAX_QUOTED_LEN>),
    /// Motor diameter is not a number.
    IllegalMotorDiameter,
    /// Motor length is not a number.
    IllegalMotorLength,
    /// Ejection delay is neither a number nor `none`.
    IllegalEjectionDelay,
    /// No `<delay>` was given for a motor.
    EjectionDelayNotSpecified,
    /// No `<designation>` was given for a motor.
    MotorDesignationMissing,
    /// No catalog entry matched; a placeholder motor was used.
    MotorNotFound(String<32>),
    /// Several catalog entries matched; the first was used.
    MultipleMotorsMatched(String<32>),
    /// The rocket cannot hold another flight configuration.
    TooManyConfigurations,
    /// Text content of an element exceeded the capture buffer.
    ContentTooLong(String<32>),
}

impl Warning {
    /// Unknown element warning, truncating the name if needed.
    pub fn unknown_element(name: &str) -> Self {
        Warning::UnknownElement(truncated(name))
    }

    /// Unknown ignition event warning, truncating the text if needed.
    pub fn unknown_ignition_event(text: &str) -> Self {
        Warning::UnknownIgnitionEvent(truncated(text))
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownElement(name) => {
                write!(f, "Unknown element '{}' encountered, ignoring.", name)
            }
            Warning::IllegalMotorSpecification => {
                write!(f, "Illegal motor specification, ignoring.")
            }
            Warning::UnknownIgnitionEvent(text) => {
                write!(f, "Unknown ignition event type '{}', ignoring.", text)
            }
            Warning::IllegalIgnitionDelay => write!(f, "Illegal ignition delay specified, ignoring."),
            Warning::IllegalOverhang => write!(f, "Illegal overhang specified, ignoring."),
            Warning::UnknownMotorType(text) => write!(f, "Unknown motor type '{}', ignoring.", text),
            Warning::IllegalMotorDiameter => write!(f, "Illegal motor diameter specified, ignoring."),
            Warning::IllegalMotorLength => write!(f, "Illegal motor length specified, ignoring."),
            Warning::IllegalEjectionDelay => write!(f, "Illegal motor delay specified, ignoring."),
            Warning::EjectionDelayNotSpecified => {
                write!(f, "Motor delay not specified, assuming no ejection charge.")
            }
            Warning::MotorDesignationMissing => {
                write!(f, "Motor designation not specified, using placeholder motor.")
            }
            Warning::MotorNotFound(designation) => write!(
                f,
                "No motor with designation '{}' found, using placeholder motor.",
                designation
            ),
            Warning::MultipleMotorsMatched(designation) => write!(
                f,
                "Multiple motors with designation '{}' found, one chosen arbitrarily.",
                designation
            ),
            Warning::TooManyConfigurations => {
                write!(f, "Too many flight configurations, ignoring motor.")
            }
            Warning::ContentTooLong(name) => {
                write!(f, "Content of element '{}' too long, ignoring.", name)
            }
        }
    }
}

/// Destination for import warnings.
pub trait WarningSink {
    /// Record a warning.
    fn add(&mut self, warning: Warning);
}

/// Deduplicating, fixed-capacity warning collection.
///
/// Adding a warning equal to one already present is a no-op. Once full, further
/// distinct warnings are counted in [`WarningSet::overflowed`] but not stored.
#[derive(Debug, Clone, Default)]
pub struct WarningSet {
    warnings: Vec<Warning, MAX_WARNINGS>,
    overflowed: usize,
}

impl WarningSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored warnings.
    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    /// Check if no warning was stored.
    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty() && self.overflowed == 0
    }

    /// Check if an equal warning was stored.
    pub fn contains(&self, warning: &Warning) -> bool {
        self.warnings.contains(warning)
    }

    /// Number of distinct warnings dropped because the set was full.
    pub fn overflowed(&self) -> usize {
        self.overflowed
    }

    /// Iterate stored warnings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Warning> {
        self.warnings.iter()
    }

    /// Remove all warnings.
    pub fn clear(&mut self) {
        self.warnings.clear();
        self.overflowed = 0;
    }
}

impl WarningSink for WarningSet {
    fn add(&mut self, warning: Warning) {
        #[cfg(feature = "defmt")]
        defmt::warn!("import: {}", defmt::Display2Format(&warning));

        if self.warnings.contains(&warning) {
            return;
        }
        if self.warnings.push(warning).is_err() {
            self.overflowed += 1;
        }
    }
}

#[cfg(feature = "std")]
impl WarningSink for std::vec::Vec<Warning> {
    fn add(&mut self, warning: Warning) {
        self.push(warning);
    }
}

impl<'a> IntoIterator for &'a WarningSet {
    type Item = &'a Warning;
    type IntoIter = core::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.warnings.iter()
    }
}
