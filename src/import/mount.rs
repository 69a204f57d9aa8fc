//! Motor mount handler: binds motors and ignition settings to a mount.
//!
//! Each closing child element is a commit point. Invalid input produces a warning
//! and skips only that element's mutation.

use crate::catalog::MotorFinder;
use crate::rocket::{FlightConfigurationId, FlightConfigurationSet, MotorInstance, MotorMount};
use crate::units::{parse_number, Meters};
use crate::warning::{Warning, WarningSink};

use super::ignition::{parse_ignition_delay, parse_ignition_event, IgnitionConfigurationHandler};
use super::motor::MotorHandler;
use super::{Attributes, Delegate, ElementHandler};

/// Plain-text leaves directly under a mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    /// `<ignitionevent>`
    IgnitionEvent,
    /// `<ignitiondelay>`
    IgnitionDelay,
    /// `<overhang>`
    Overhang,
}

/// What the mount handler is currently inside of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MountState {
    /// Between children.
    #[default]
    Idle,
    /// Inside `<motor>`.
    InMotor,
    /// Inside `<ignitionconfiguration>`.
    InIgnitionConfig,
    /// Inside a plain-text leaf.
    Text(TextField),
}

/// Handles the children of one mount-bearing element.
pub struct MotorMountHandler<'a, F: MotorFinder + ?Sized> {
    mount: &'a mut MotorMount,
    configurations: &'a mut FlightConfigurationSet,
    finder: &'a F,
    state: MountState,
    motor_handler: Option<MotorHandler>,
    ignition_handler: Option<IgnitionConfigurationHandler>,
}

impl<'a, F: MotorFinder + ?Sized> MotorMountHandler<'a, F> {
    /// Start handling `mount`. Marks it as a motor mount.
    pub fn new(
        mount: &'a mut MotorMount,
        configurations: &'a mut FlightConfigurationSet,
        finder: &'a F,
    ) -> Self {
        mount.set_motor_mount(true);
        Self {
            mount,
            configurations,
            finder,
            state: MountState::Idle,
            motor_handler: None,
            ignition_handler: None,
        }
    }

    /// Current state.
    pub fn state(&self) -> MountState {
        self.state
    }

    /// The mount being configured.
    pub fn mount(&self) -> &MotorMount {
        self.mount
    }

    /// The configuration set being registered into.
    pub fn configurations(&self) -> &FlightConfigurationSet {
        self.configurations
    }

    /// Active motor sub-parser.
    pub fn motor_handler_mut(&mut self) -> Option<&mut MotorHandler> {
        self.motor_handler.as_mut()
    }

    /// Active ignition sub-parser.
    pub fn ignition_handler_mut(&mut self) -> Option<&mut IgnitionConfigurationHandler> {
        self.ignition_handler.as_mut()
    }

    /// Drop whatever child is open without committing it.
    pub fn abandon_element(&mut self) {
        self.state = MountState::Idle;
        self.motor_handler = None;
        self.ignition_handler = None;
    }

    fn close_motor(&mut self, attributes: &Attributes, warnings: &mut dyn WarningSink) {
        let handler = self.motor_handler.take().unwrap_or_default();
        let Some(id) = configuration_id(attributes) else {
            warnings.add(Warning::IllegalMotorSpecification);
            return;
        };

        let motor = handler.motor(self.finder, warnings);
        let mut instance = MotorInstance::new(motor);
        instance.set_ejection_delay(handler.ejection_delay(warnings));

        // Register first so the mount never holds a key the rocket does not know
        if self.configurations.create(id.clone()).is_err() {
            warnings.add(Warning::TooManyConfigurations);
            return;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "mount {=str}: bound {=str} for {=str}",
            self.mount.name(),
            instance.motor().map_or("", |m| m.designation.as_str()),
            id.as_str()
        );

        if self.mount.set_motor_instance(id, instance).is_err() {
            warnings.add(Warning::TooManyConfigurations);
        }
    }

    fn close_ignition_configuration(&mut self, attributes: &Attributes, warnings: &mut dyn WarningSink) {
        let handler = self.ignition_handler.take().unwrap_or_default();
        if configuration_id(attributes).is_none() {
            warnings.add(Warning::IllegalMotorSpecification);
            return;
        }

        // The override lands on the default instance whatever the configid says
        let instance = self.mount.default_motor_instance_mut();
        if let Some(delay) = handler.ignition_delay() {
            instance.set_ignition_delay(delay);
        }
        if let Some(event) = handler.ignition_event() {
            instance.set_ignition_event(event);
        }
    }
}

fn configuration_id(attributes: &Attributes) -> Option<FlightConfigurationId> {
    attributes
        .get("configid")
        .and_then(|raw| FlightConfigurationId::new(raw).ok())
}

impl<F: MotorFinder + ?Sized> ElementHandler for MotorMountHandler<'_, F> {
    fn open_element(
        &mut self,
        element: &str,
        _attributes: &Attributes,
        warnings: &mut dyn WarningSink,
    ) -> Option<Delegate> {
        let (state, delegate) = match element {
            "motor" => {
                self.motor_handler = Some(MotorHandler::new());
                (MountState::InMotor, Delegate::Motor)
            }
            "ignitionconfiguration" => {
                self.ignition_handler = Some(IgnitionConfigurationHandler::new());
                (MountState::InIgnitionConfig, Delegate::IgnitionConfiguration)
            }
            "ignitionevent" => (MountState::Text(TextField::IgnitionEvent), Delegate::PlainText),
            "ignitiondelay" => (MountState::Text(TextField::IgnitionDelay), Delegate::PlainText),
            "overhang" => (MountState::Text(TextField::Overhang), Delegate::PlainText),
            _ => {
                warnings.add(Warning::unknown_element(element));
                return None;
            }
        };
        self.state = state;
        Some(delegate)
    }

    fn close_element(
        &mut self,
        element: &str,
        attributes: &Attributes,
        content: &str,
        warnings: &mut dyn WarningSink,
    ) {
        self.state = MountState::Idle;
        match element {
            "motor" => self.close_motor(attributes, warnings),
            "ignitionconfiguration" => self.close_ignition_configuration(attributes, warnings),
            "ignitionevent" => {
                if let Some(event) = parse_ignition_event(content, warnings) {
                    self.mount.default_motor_instance_mut().set_ignition_event(event);
                }
            }
            "ignitiondelay" => {
                if let Some(delay) = parse_ignition_delay(content, warnings) {
                    self.mount.default_motor_instance_mut().set_ignition_delay(delay);
                }
            }
            "overhang" => match parse_number(content) {
                Some(overhang) => self.mount.set_overhang(Meters(overhang)),
                None => warnings.add(Warning::IllegalOverhang),
            },
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Motor, MotorCatalog, MotorType};
    use crate::rocket::IgnitionEvent;
    use crate::units::Seconds;
    use crate::warning::WarningSet;

    fn id(s: &str) -> FlightConfigurationId {
        FlightConfigurationId::new(s).unwrap()
    }

    fn catalog() -> MotorCatalog {
        let mut c = MotorCatalog::new();
        c.add(Motor::placeholder(MotorType::SingleUse, "Estes", "C6", Meters(0.018), Meters(0.07)))
            .unwrap();
        c
    }

    #[test]
    fn test_construction_marks_mount() {
        let mut mount = MotorMount::new("Tube").unwrap();
        let mut configs = FlightConfigurationSet::new();
        let catalog = catalog();
        let handler = MotorMountHandler::new(&mut mount, &mut configs, &catalog);
        assert_eq!(handler.state(), MountState::Idle);
        drop(handler);
        assert!(mount.is_motor_mount());
    }

    #[test]
    fn test_motor_commit() {
        let mut mount = MotorMount::new("Tube").unwrap();
        let mut configs = FlightConfigurationSet::new();
        let catalog = catalog();
        let mut w = WarningSet::new();
        let attrs = Attributes::new().with("configid", "cfg-A");
        {
            let mut h = MotorMountHandler::new(&mut mount, &mut configs, &catalog);
            assert_eq!(h.open_element("motor", &attrs, &mut w), Some(Delegate::Motor));
            assert_eq!(h.state(), MountState::InMotor);
            let m = h.motor_handler_mut().unwrap();
            m.close_element("designation", &Attributes::new(), "C6", &mut w);
            m.close_element("delay", &Attributes::new(), "0.5", &mut w);
            h.close_element("motor", &attrs, "", &mut w);
            assert_eq!(h.state(), MountState::Idle);
        }
        let inst = mount.bound_instance(&id("cfg-A")).unwrap();
        assert_eq!(inst.ejection_delay(), Seconds(0.5));
        assert_eq!(inst.motor().unwrap().manufacturer.as_str(), "Estes");
        assert!(configs.contains(&id("cfg-A")));
        assert!(w.is_empty());
    }

    #[test]
    fn test_invalid_configid_discards_motor() {
        let mut mount = MotorMount::new("Tube").unwrap();
        let mut configs = FlightConfigurationSet::new();
        let catalog = catalog();
        let mut w = WarningSet::new();
        let attrs = Attributes::new().with("configid", "");
        {
            let mut h = MotorMountHandler::new(&mut mount, &mut configs, &catalog);
            h.open_element("motor", &attrs, &mut w);
            h.close_element("motor", &attrs, "", &mut w);
        }
        assert_eq!(mount.motor_count(), 0);
        assert!(configs.is_empty());
        assert_eq!(w.len(), 1);
        assert!(w.contains(&Warning::IllegalMotorSpecification));
    }

    #[test]
    fn test_ignition_configuration_targets_default_instance() {
        let mut mount = MotorMount::new("Tube").unwrap();
        let mut configs = FlightConfigurationSet::new();
        let catalog = catalog();
        let mut w = WarningSet::new();
        let motor_attrs = Attributes::new().with("configid", "cfg-A");
        {
            let mut h = MotorMountHandler::new(&mut mount, &mut configs, &catalog);
            h.open_element("motor", &motor_attrs, &mut w);
            h.close_element("motor", &motor_attrs, "", &mut w);

            let attrs = Attributes::new().with("configid", "cfg-A");
            h.open_element("ignitionconfiguration", &attrs, &mut w);
            let ic = h.ignition_handler_mut().unwrap();
            ic.close_element("ignitionevent", &Attributes::new(), "NEVER", &mut w);
            ic.close_element("ignitiondelay", &Attributes::new(), "2.5", &mut w);
            h.close_element("ignitionconfiguration", &attrs, "", &mut w);
        }
        let default = mount.default_motor_instance();
        assert_eq!(default.ignition_event(), IgnitionEvent::Never);
        assert_eq!(default.ignition_delay(), Seconds(2.5));

        let bound = mount.bound_instance(&id("cfg-A")).unwrap();
        assert_eq!(bound.ignition_event(), IgnitionEvent::Automatic);
        assert_eq!(bound.ignition_delay(), Seconds(0.0));
    }

    #[test]
    fn test_leaves() {
        let mut mount = MotorMount::new("Tube").unwrap();
        let mut configs = FlightConfigurationSet::new();
        let catalog = catalog();
        let mut w = WarningSet::new();
        let attrs = Attributes::new();
        {
            let mut h = MotorMountHandler::new(&mut mount, &mut configs, &catalog);
            assert_eq!(h.open_element("overhang", &attrs, &mut w), Some(Delegate::PlainText));
            assert_eq!(h.state(), MountState::Text(TextField::Overhang));
            h.close_element("overhang", &attrs, "0.012", &mut w);
            h.close_element("overhang", &attrs, "far", &mut w);
            h.close_element("ignitionevent", &attrs, "LAUNCH", &mut w);
            h.close_element("ignitiondelay", &attrs, "abc", &mut w);
        }
        assert_eq!(mount.overhang(), Meters(0.012));
        assert_eq!(mount.default_motor_instance().ignition_event(), IgnitionEvent::Launch);
        assert_eq!(mount.default_motor_instance().ignition_delay(), Seconds(0.0));
        assert!(w.contains(&Warning::IllegalOverhang));
        assert!(w.contains(&Warning::IllegalIgnitionDelay));
    }

    #[test]
    fn test_unknown_child() {
        let mut mount = MotorMount::new("Tube").unwrap();
        let mut configs = FlightConfigurationSet::new();
        let catalog = catalog();
        let mut w = WarningSet::new();
        let mut h = MotorMountHandler::new(&mut mount, &mut configs, &catalog);
        assert_eq!(h.open_element("finset", &Attributes::new(), &mut w), None);
        assert_eq!(h.state(), MountState::Idle);
        assert!(w.contains(&Warning::unknown_element("finset")));
    }
}
