//! Property tests for the mount importer.

use motor_mount::{
    Attributes, FlightConfigurationId, IgnitionEvent, MotorCatalog, MountId, MountSession, Rocket,
    Seconds, Warning, WarningSet,
};
use proptest::prelude::*;

fn rocket() -> (Rocket, MountId) {
    let mut rocket = Rocket::new("Prop").unwrap();
    let mount = rocket.add_mount("Tube").unwrap();
    (rocket, mount)
}

/// Feed `<element>text</element>` straight into a mount session.
fn leaf(session: &mut MountSession<'_, MotorCatalog>, element: &str, text: &str, w: &mut WarningSet) {
    session.start_element(element, Attributes::new(), w).unwrap();
    session.characters(text);
    session.end_element(element, w).unwrap();
}

fn motor(
    session: &mut MountSession<'_, MotorCatalog>,
    configid: Option<&str>,
    w: &mut WarningSet,
) {
    let attributes = match configid {
        Some(id) => Attributes::new().with("configid", id),
        None => Attributes::new(),
    };
    session.start_element("motor", attributes, w).unwrap();
    leaf(session, "designation", "C6", w);
    leaf(session, "delay", "3", w);
    session.end_element("motor", w).unwrap();
}

proptest! {
    #[test]
    fn valid_configid_binds_one_instance(id in "[A-Za-z0-9_-]{1,36}") {
        let (mut rocket, mount) = rocket();
        let catalog = MotorCatalog::new();
        let mut w = WarningSet::new();

        let mut session = MountSession::for_rocket(&mut rocket, mount, &catalog).unwrap();
        motor(&mut session, Some(&id), &mut w);
        session.finish().unwrap();

        let key = FlightConfigurationId::new(&id).unwrap();
        let mount = rocket.mount(mount).unwrap();
        prop_assert_eq!(mount.motor_count(), 1);
        prop_assert!(mount.has_motor_instance(&key));
        prop_assert_eq!(mount.motor_instance(&key).ejection_delay(), Seconds(3.0));
        prop_assert!(rocket.configurations().contains(&key));
        prop_assert!(!w.contains(&Warning::IllegalMotorSpecification));
    }

    #[test]
    fn invalid_configid_changes_nothing(id in prop_oneof![
        Just(String::new()),
        "[ /#&!]{1,8}",
        "[a-z]{1,8} [a-z]{1,8}",
    ]) {
        let (mut rocket, mount) = rocket();
        let catalog = MotorCatalog::new();
        let mut w = WarningSet::new();

        let mut session = MountSession::for_rocket(&mut rocket, mount, &catalog).unwrap();
        motor(&mut session, Some(&id), &mut w);
        motor(&mut session, None, &mut w);
        session.finish().unwrap();

        prop_assert_eq!(rocket.mount(mount).unwrap().motor_count(), 0);
        prop_assert!(rocket.configurations().is_empty());
        prop_assert!(w.contains(&Warning::IllegalMotorSpecification));
    }

    #[test]
    fn invalid_ignition_configid_changes_nothing(id in prop_oneof![
        Just(String::new()),
        Just("error_key".to_string()),
        Just("default_value".to_string()),
        "[ /#&!]{1,8}",
        "[a-z]{1,8} [a-z]{1,8}",
    ]) {
        let (mut rocket, mount) = rocket();
        let catalog = MotorCatalog::new();
        let mut w = WarningSet::new();
        let bound = FlightConfigurationId::new("bound").unwrap();

        let mut session = MountSession::for_rocket(&mut rocket, mount, &catalog).unwrap();
        motor(&mut session, Some(bound.as_str()), &mut w);
        let before = session.handler().mount().clone();

        session
            .start_element("ignitionconfiguration", Attributes::new().with("configid", &id), &mut w)
            .unwrap();
        leaf(&mut session, "ignitionevent", "NEVER", &mut w);
        leaf(&mut session, "ignitiondelay", "4.5", &mut w);
        session.end_element("ignitionconfiguration", &mut w).unwrap();
        session.finish().unwrap();

        let after = rocket.mount(mount).unwrap();
        prop_assert_eq!(after.default_motor_instance(), before.default_motor_instance());
        prop_assert_eq!(after.default_motor_instance().ignition_event(), IgnitionEvent::Automatic);
        prop_assert_eq!(after.motor_count(), 1);
        prop_assert_eq!(after.bound_instance(&bound), before.bound_instance(&bound));
        prop_assert_eq!(rocket.configurations().len(), 1);
        prop_assert!(rocket.configurations().contains(&bound));
        prop_assert!(w.contains(&Warning::IllegalMotorSpecification));
    }

    #[test]
    fn unknown_ignition_event_keeps_previous(text in "[a-z]{1,12}") {
        let (mut rocket, mount) = rocket();
        let catalog = MotorCatalog::new();
        let mut w = WarningSet::new();

        let mut session = MountSession::for_rocket(&mut rocket, mount, &catalog).unwrap();
        leaf(&mut session, "ignitionevent", "BURNOUT", &mut w);
        leaf(&mut session, "ignitionevent", &text, &mut w);
        session.finish().unwrap();

        let instance = rocket.mount(mount).unwrap().default_motor_instance();
        prop_assert_eq!(instance.ignition_event(), IgnitionEvent::Burnout);
        prop_assert!(w.contains(&Warning::unknown_ignition_event(&text)));
    }

    #[test]
    fn non_numeric_values_keep_previous(text in "[a-z]{1,12}") {
        let (mut rocket, mount) = rocket();
        let catalog = MotorCatalog::new();
        let mut w = WarningSet::new();

        let mut session = MountSession::for_rocket(&mut rocket, mount, &catalog).unwrap();
        leaf(&mut session, "ignitiondelay", "2", &mut w);
        leaf(&mut session, "overhang", "0.25", &mut w);
        leaf(&mut session, "ignitiondelay", &text, &mut w);
        leaf(&mut session, "overhang", &text, &mut w);
        session.finish().unwrap();

        let mount = rocket.mount(mount).unwrap();
        prop_assert_eq!(mount.default_motor_instance().ignition_delay(), Seconds(2.0));
        prop_assert_eq!(mount.overhang().value(), 0.25);
        prop_assert!(w.contains(&Warning::IllegalIgnitionDelay));
        prop_assert!(w.contains(&Warning::IllegalOverhang));
    }

    #[test]
    fn numeric_overhang_is_applied(value in -1.0e3f64..1.0e3) {
        let (mut rocket, mount) = rocket();
        let catalog = MotorCatalog::new();
        let mut w = WarningSet::new();

        let mut session = MountSession::for_rocket(&mut rocket, mount, &catalog).unwrap();
        leaf(&mut session, "overhang", &format!("  {}\n", value), &mut w);
        session.finish().unwrap();

        prop_assert_eq!(rocket.mount(mount).unwrap().overhang().value(), value);
        prop_assert!(w.is_empty());
    }
}
