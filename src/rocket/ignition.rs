//! Ignition events.

use core::fmt;
use core::str::FromStr;

/// Condition that fires a motor's ignition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IgnitionEvent {
    /// Launch for the bottom stage, ejection charge of the previous stage otherwise.
    #[default]
    Automatic,
    /// At launch.
    Launch,
    /// First ejection charge of the previous stage.
    EjectionCharge,
    /// First burnout of the previous stage.
    Burnout,
    /// Never ignites.
    Never,
}

impl IgnitionEvent {
    /// All events in canonical order.
    pub const ALL: [IgnitionEvent; 5] = [
        IgnitionEvent::Automatic,
        IgnitionEvent::Launch,
        IgnitionEvent::EjectionCharge,
        IgnitionEvent::Burnout,
        IgnitionEvent::Never,
    ];

    /// Canonical name as written in design files.
    pub const fn canonical_name(self) -> &'static str {
        match self {
            IgnitionEvent::Automatic => "AUTOMATIC",
            IgnitionEvent::Launch => "LAUNCH",
            IgnitionEvent::EjectionCharge => "EJECTION_CHARGE",
            IgnitionEvent::Burnout => "BURNOUT",
            IgnitionEvent::Never => "NEVER",
        }
    }

    /// Human-readable description.
    pub const fn description(self) -> &'static str {
        match self {
            IgnitionEvent::Automatic => "Automatic (launch or ejection charge)",
            IgnitionEvent::Launch => "Launch",
            IgnitionEvent::EjectionCharge => "First ejection charge of previous stage",
            IgnitionEvent::Burnout => "First burnout of previous stage",
            IgnitionEvent::Never => "Never",
        }
    }

    /// Look up an event by its exact, case-sensitive canonical name.
    pub fn from_canonical_name(name: &str) -> Option<Self> {
        match name {
            "AUTOMATIC" => Some(IgnitionEvent::Automatic),
            "LAUNCH" => Some(IgnitionEvent::Launch),
            "EJECTION_CHARGE" => Some(IgnitionEvent::EjectionCharge),
            "BURNOUT" => Some(IgnitionEvent::Burnout),
            "NEVER" => Some(IgnitionEvent::Never),
            _ => None,
        }
    }
}

/// Error returned when text names no ignition event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnknownIgnitionEvent;

impl FromStr for IgnitionEvent {
    type Err = UnknownIgnitionEvent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_canonical_name(s).ok_or(UnknownIgnitionEvent)
    }
}

impl fmt::Display for IgnitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_matches_canonical_names() {
        for event in IgnitionEvent::ALL {
            assert_eq!(IgnitionEvent::from_canonical_name(event.canonical_name()), Some(event));
        }
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!("LAUNCH".parse(), Ok(IgnitionEvent::Launch));
        assert_eq!("launch".parse::<IgnitionEvent>(), Err(UnknownIgnitionEvent));
        assert_eq!(" LAUNCH".parse::<IgnitionEvent>(), Err(UnknownIgnitionEvent));
        assert_eq!("".parse::<IgnitionEvent>(), Err(UnknownIgnitionEvent));
    }
}
