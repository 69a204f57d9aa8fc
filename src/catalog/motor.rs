//! Motor definitions from the catalog.

use core::fmt::{self, Write};

use heapless::{String, Vec};
use serde::Deserialize;

use crate::error::truncated;
use crate::units::{Meters, Seconds};

/// Maximum number of standard ejection delays per motor.
pub const MAX_STANDARD_DELAYS: usize = 8;

/// Capacity of a motor label such as `C6-5`: a designation, a dash and up to 15 delay characters.
pub const MAX_LABEL_LEN: usize = 48;

/// Motor construction type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotorType {
    /// Single-use motor.
    #[serde(rename = "single")]
    SingleUse,
    /// Reloadable motor.
    Reload,
    /// Hybrid motor.
    Hybrid,
    /// Unknown or unspecified.
    #[default]
    Unknown,
}

impl MotorType {
    /// Parse the token used in design files (`single`, `reload`, `hybrid`, `unknown`).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "single" => Some(MotorType::SingleUse),
            "reload" => Some(MotorType::Reload),
            "hybrid" => Some(MotorType::Hybrid),
            "unknown" => Some(MotorType::Unknown),
            _ => None,
        }
    }

    /// Token used in design files.
    pub const fn token(self) -> &'static str {
        match self {
            MotorType::SingleUse => "single",
            MotorType::Reload => "reload",
            MotorType::Hybrid => "hybrid",
            MotorType::Unknown => "unknown",
        }
    }
}

/// Immutable definition of a motor.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Motor {
    /// Construction type.
    #[serde(default, rename = "type")]
    pub kind: MotorType,

    /// Manufacturer name (max 32 chars).
    #[serde(default)]
    pub manufacturer: String<32>,

    /// Designation such as `C6` (max 32 chars).
    pub designation: String<32>,

    /// Outer diameter.
    pub diameter: Meters,

    /// Overall length.
    pub length: Meters,

    /// Standard ejection delays offered by the manufacturer.
    #[serde(default)]
    pub delays: Vec<Seconds, MAX_STANDARD_DELAYS>,

    /// Content digest of the thrust curve, if known.
    #[serde(default)]
    pub digest: Option<String<64>>,
}

impl Motor {
    /// Build a stand-in for a motor that could not be resolved.
    pub fn placeholder(
        kind: MotorType,
        manufacturer: &str,
        designation: &str,
        diameter: Meters,
        length: Meters,
    ) -> Self {
        Self {
            kind,
            manufacturer: truncated(manufacturer),
            designation: truncated(designation),
            diameter,
            length,
            delays: Vec::new(),
            digest: None,
        }
    }

    /// Designation followed by an ejection delay, e.g. `C6-5`, `C6-2.5` or `C6-P` when plugged.
    ///
    /// The delay is rounded to one decimal and whole values print without one.
    /// Returns `None` if the delay is too large to render within [`MAX_LABEL_LEN`].
    pub fn designation_with_delay(&self, delay: Seconds) -> Option<String<MAX_LABEL_LEN>> {
        let mut out = String::new();
        out.push_str(self.designation.as_str()).ok()?;
        out.push('-').ok()?;
        if delay.is_plugged() {
            out.push('P').ok()?;
        } else {
            // Adding zero folds -0.0 into 0.0
            let rounded = libm::round(delay.value() * 10.0) / 10.0 + 0.0;
            if rounded == libm::trunc(rounded) {
                write!(out, "{:.0}", rounded).ok()?;
            } else {
                write!(out, "{:.1}", rounded).ok()?;
            }
        }
        Some(out)
    }
}

impl fmt::Display for Motor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.manufacturer.is_empty() {
            f.write_str(self.designation.as_str())
        } else {
            write!(f, "{} {}", self.manufacturer, self.designation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c6() -> Motor {
        Motor::placeholder(MotorType::SingleUse, "Estes", "C6", Meters(0.018), Meters(0.070))
    }

    #[test]
    fn test_designation_with_delay() {
        let motor = c6();
        let label = |d| motor.designation_with_delay(d).unwrap();
        assert_eq!(label(Seconds(5.0)).as_str(), "C6-5");
        assert_eq!(label(Seconds(2.5)).as_str(), "C6-2.5");
        assert_eq!(label(Seconds::PLUGGED).as_str(), "C6-P");
        assert_eq!(label(Seconds(0.30000000000000004)).as_str(), "C6-0.3");
        assert_eq!(label(Seconds(6.96)).as_str(), "C6-7");
        assert_eq!(label(Seconds(-0.01)).as_str(), "C6-0");
    }

    #[test]
    fn test_designation_with_delay_long_designation() {
        let name = "Cesaroni-Pro54-2G-1234-Imax-Fast";
        assert_eq!(name.len(), 32);
        let motor = Motor::placeholder(MotorType::Reload, "Cesaroni", name, Meters(0.054), Meters(0.4));

        let label = motor.designation_with_delay(Seconds(0.30000000000000004)).unwrap();
        assert_eq!(label.as_str(), "Cesaroni-Pro54-2G-1234-Imax-Fast-0.3");
        assert!(motor.designation_with_delay(Seconds(99_999_999_999_999.0)).is_some());
        assert!(motor.designation_with_delay(Seconds(1.0e300)).is_none());
    }

    #[test]
    fn test_type_tokens() {
        for kind in [MotorType::SingleUse, MotorType::Reload, MotorType::Hybrid, MotorType::Unknown] {
            assert_eq!(MotorType::from_token(kind.token()), Some(kind));
        }
        assert_eq!(MotorType::from_token("Single"), None);
    }
}
