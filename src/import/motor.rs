//! Motor sub-parser for `<motor>` subtrees.

use heapless::String;

use crate::catalog::{Motor, MotorFinder, MotorQuery, MotorType};
use crate::error::truncated;
use crate::units::{parse_number, Meters, Seconds};
use crate::warning::{Warning, WarningSink};

use super::{Attributes, Delegate, ElementHandler};

/// Collects the description of one motor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotorHandler {
    kind: Option<MotorType>,
    manufacturer: Option<String<32>>,
    designation: Option<String<32>>,
    digest: Option<String<64>>,
    diameter: Option<Meters>,
    length: Option<Meters>,
    delay: Option<Seconds>,
}

impl MotorHandler {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// The description gathered so far.
    pub fn query(&self) -> MotorQuery<'_> {
        MotorQuery {
            kind: self.kind,
            manufacturer: self.manufacturer.as_deref(),
            designation: self.designation.as_deref(),
            diameter: self.diameter,
            length: self.length,
            digest: self.digest.as_deref(),
        }
    }

    /// Resolve the described motor through `finder`.
    pub fn motor<F: MotorFinder + ?Sized>(&self, finder: &F, warnings: &mut dyn WarningSink) -> Motor {
        finder.find_motor(&self.query(), warnings)
    }

    /// Ejection delay, or plugged with a warning if none was given.
    pub fn ejection_delay(&self, warnings: &mut dyn WarningSink) -> Seconds {
        match self.delay {
            Some(delay) => delay,
            None => {
                warnings.add(Warning::EjectionDelayNotSpecified);
                Seconds::PLUGGED
            }
        }
    }
}

impl ElementHandler for MotorHandler {
    fn open_element(
        &mut self,
        element: &str,
        _attributes: &Attributes,
        warnings: &mut dyn WarningSink,
    ) -> Option<Delegate> {
        match element {
            "type" | "manufacturer" | "digest" | "designation" | "diameter" | "length" | "delay" => {
                Some(Delegate::PlainText)
            }
            _ => {
                warnings.add(Warning::unknown_element(element));
                None
            }
        }
    }

    fn close_element(
        &mut self,
        element: &str,
        _attributes: &Attributes,
        content: &str,
        warnings: &mut dyn WarningSink,
    ) {
        match element {
            "type" => match MotorType::from_token(content) {
                Some(kind) => self.kind = Some(kind),
                None => warnings.add(Warning::UnknownMotorType(truncated(content))),
            },
            "manufacturer" => self.manufacturer = Some(truncated(content)),
            "designation" => self.designation = Some(truncated(content)),
            "digest" => self.digest = Some(truncated(content)),
            "diameter" => match parse_number(content) {
                Some(d) => self.diameter = Some(Meters(d)),
                None => warnings.add(Warning::IllegalMotorDiameter),
            },
            "length" => match parse_number(content) {
                Some(l) => self.length = Some(Meters(l)),
                None => warnings.add(Warning::IllegalMotorLength),
            },
            "delay" => {
                if content == "none" {
                    self.delay = Some(Seconds::PLUGGED);
                } else {
                    match parse_number(content) {
                        Some(d) => self.delay = Some(Seconds(d)),
                        None => warnings.add(Warning::IllegalEjectionDelay),
                    }
                }
            }
            _ => {}
        }
    }
}
