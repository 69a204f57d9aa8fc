//! Ignition configuration sub-parser and the shared ignition leaf parsers.

use crate::rocket::IgnitionEvent;
use crate::units::{parse_number, Seconds};
use crate::warning::{Warning, WarningSink};

use super::{Attributes, Delegate, ElementHandler};

/// Parse `<ignitionevent>` text, warning if it names no event.
pub(super) fn parse_ignition_event(
    content: &str,
    warnings: &mut dyn WarningSink,
) -> Option<IgnitionEvent> {
    let event = IgnitionEvent::from_canonical_name(content);
    if event.is_none() {
        warnings.add(Warning::unknown_ignition_event(content));
    }
    event
}

/// Parse `<ignitiondelay>` text, warning if it is not a number.
pub(super) fn parse_ignition_delay(content: &str, warnings: &mut dyn WarningSink) -> Option<Seconds> {
    let delay = parse_number(content).map(Seconds);
    if delay.is_none() {
        warnings.add(Warning::IllegalIgnitionDelay);
    }
    delay
}

/// Collects the ignition override of one `<ignitionconfiguration>` block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IgnitionConfigurationHandler {
    ignition_event: Option<IgnitionEvent>,
    ignition_delay: Option<Seconds>,
}

impl IgnitionConfigurationHandler {
    /// Create an empty handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignition event read so far.
    pub fn ignition_event(&self) -> Option<IgnitionEvent> {
        self.ignition_event
    }

    /// Ignition delay read so far.
    pub fn ignition_delay(&self) -> Option<Seconds> {
        self.ignition_delay
    }
}

impl ElementHandler for IgnitionConfigurationHandler {
    fn open_element(
        &mut self,
        element: &str,
        _attributes: &Attributes,
        warnings: &mut dyn WarningSink,
    ) -> Option<Delegate> {
        match element {
            "ignitionevent" | "ignitiondelay" => Some(Delegate::PlainText),
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
            "ignitionevent" => {
                if let Some(event) = parse_ignition_event(content, warnings) {
                    self.ignition_event = Some(event);
                }
            }
            "ignitiondelay" => {
                if let Some(delay) = parse_ignition_delay(content, warnings) {
                    self.ignition_delay = Some(delay);
                }
            }
            _ => {}
        }
    }
}
