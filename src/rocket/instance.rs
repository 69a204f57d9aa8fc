//! Motor instances: one motor placed in one mount for one flight configuration.

use crate::catalog::Motor;
use crate::rocket::IgnitionEvent;
use crate::units::Seconds;

/// Placement of a motor definition with its ignition and ejection parameters.
///
/// An instance without a motor is "empty"; every mount carries one as its default
/// instance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotorInstance {
    motor: Option<Motor>,
    ejection_delay: Seconds,
    ignition_event: IgnitionEvent,
    ignition_delay: Seconds,
}

impl MotorInstance {
    /// New instance of `motor` with default ignition parameters.
    pub fn new(motor: Motor) -> Self {
        Self {
            motor: Some(motor),
            ..Self::default()
        }
    }

    /// Instance holding no motor.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if no motor is placed.
    pub fn is_empty(&self) -> bool {
        self.motor.is_none()
    }

    /// The placed motor, if any.
    pub fn motor(&self) -> Option<&Motor> {
        self.motor.as_ref()
    }

    /// Ejection charge delay after burnout.
    pub fn ejection_delay(&self) -> Seconds {
        self.ejection_delay
    }

    /// Set the ejection charge delay.
    pub fn set_ejection_delay(&mut self, delay: Seconds) {
        self.ejection_delay = delay;
    }

    /// Condition that fires this motor.
    pub fn ignition_event(&self) -> IgnitionEvent {
        self.ignition_event
    }

    /// Set the ignition event.
    pub fn set_ignition_event(&mut self, event: IgnitionEvent) {
        self.ignition_event = event;
    }

    /// Delay between the ignition event and ignition.
    pub fn ignition_delay(&self) -> Seconds {
        self.ignition_delay
    }

    /// Set the ignition delay.
    pub fn set_ignition_delay(&mut self, delay: Seconds) {
        self.ignition_delay = delay;
    }
}
