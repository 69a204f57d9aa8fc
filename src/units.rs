//! Unit types for physical quantities.
//!
//! Provides type-safe representations of durations and lengths so that delays,
//! diameters and overhang cannot be mixed up at compile time.

use core::ops::{Add, Sub};
use core::str::FromStr;

use serde::Deserialize;

/// Duration in seconds.
///
/// Used for ignition and ejection delays. [`Seconds::PLUGGED`] marks a motor with no
/// ejection charge.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Ejection delay of a plugged motor (no ejection charge).
    pub const PLUGGED: Self = Self(f64::INFINITY);

    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if this is the plugged marker.
    #[inline]
    pub fn is_plugged(self) -> bool {
        self.0 == f64::INFINITY
    }
}

impl Add for Seconds {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

/// Length in meters.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl Meters {
    /// Create a new Meters value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Check if two lengths differ by at most `tolerance`.
    #[inline]
    pub fn approx_eq(self, other: Self, tolerance: Meters) -> bool {
        libm::fabs(self.0 - other.0) <= tolerance.0
    }
}

impl Add for Meters {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Meters {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

/// Strictly parse a decimal floating-point literal.
///
/// Surrounding XML whitespace is ignored. Anything else that is not a complete
/// literal fails, as do non-finite results such as `inf` or `NaN`.
pub fn parse_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r'));
    f64::from_str(trimmed).ok().filter(|v| v.is_finite())
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
    /// Convert to Meters.
    fn meters(self) -> Meters;
}

impl UnitExt for f64 {
    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }

    #[inline]
    fn meters(self) -> Meters {
        Meters(self)
    }
}
