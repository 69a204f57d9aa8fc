//! Motor mounts: rocket components that hold a motor per flight configuration.

use heapless::{FnvIndexMap, String};

use crate::error::{Error, Result, RocketError};
use crate::rocket::{FlightConfigurationId, MotorInstance};
use crate::units::Meters;
use crate::MAX_CONFIGURATIONS;

/// A structural component capable of holding motors.
///
/// Instances are keyed by flight configuration. Lookups for a configuration with no
/// bound instance fall back to the mount's default instance, which is also where
/// mount-wide ignition settings live.
#[derive(Debug, Clone)]
pub struct MotorMount {
    name: String<32>,
    motor_mount: bool,
    overhang: Meters,
    instances: FnvIndexMap<FlightConfigurationId, MotorInstance, MAX_CONFIGURATIONS>,
    default_instance: MotorInstance,
}

impl MotorMount {
    /// Create a mount that is not yet configured to hold motors.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::NameTooLong` if `name` exceeds 32 bytes.
    pub fn new(name: &str) -> Result<Self> {
        let name = String::try_from(name).map_err(|_| Error::Rocket(RocketError::NameTooLong))?;
        Ok(Self {
            name,
            motor_mount: false,
            overhang: Meters(0.0),
            instances: FnvIndexMap::new(),
            default_instance: MotorInstance::empty(),
        })
    }

    /// Component name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Check if the component is configured as a motor mount.
    pub fn is_motor_mount(&self) -> bool {
        self.motor_mount
    }

    /// Mark the component as a motor mount (or not).
    pub fn set_motor_mount(&mut self, motor_mount: bool) {
        self.motor_mount = motor_mount;
    }

    /// Motor overhang past the aft end of the mount.
    pub fn overhang(&self) -> Meters {
        self.overhang
    }

    /// Set the motor overhang.
    pub fn set_overhang(&mut self, overhang: Meters) {
        self.overhang = overhang;
    }

    /// Instance bound for `id`, or the default instance if none is bound.
    pub fn motor_instance(&self, id: &FlightConfigurationId) -> &MotorInstance {
        self.instances.get(id).unwrap_or(&self.default_instance)
    }

    /// Instance bound for `id`, without fallback.
    pub fn bound_instance(&self, id: &FlightConfigurationId) -> Option<&MotorInstance> {
        self.instances.get(id)
    }

    /// Mutable instance bound for `id`, without fallback.
    pub fn bound_instance_mut(&mut self, id: &FlightConfigurationId) -> Option<&mut MotorInstance> {
        self.instances.get_mut(id)
    }

    /// Check if an instance is bound for `id`.
    pub fn has_motor_instance(&self, id: &FlightConfigurationId) -> bool {
        self.instances.contains_key(id)
    }

    /// Bind `instance` to `id`, replacing any previous instance for that key.
    ///
    /// Returns the replaced instance.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::TooManyConfigurations` if the mount is full.
    pub fn set_motor_instance(
        &mut self,
        id: FlightConfigurationId,
        instance: MotorInstance,
    ) -> Result<Option<MotorInstance>> {
        self.instances
            .insert(id, instance)
            .map_err(|_| Error::Rocket(RocketError::TooManyConfigurations))
    }

    /// Unbind the instance for `id`.
    pub fn remove_motor_instance(&mut self, id: &FlightConfigurationId) -> Option<MotorInstance> {
        self.instances.remove(id)
    }

    /// The default instance.
    pub fn default_motor_instance(&self) -> &MotorInstance {
        &self.default_instance
    }

    /// Mutable access to the default instance.
    pub fn default_motor_instance_mut(&mut self) -> &mut MotorInstance {
        &mut self.default_instance
    }

    /// Number of bound instances.
    pub fn motor_count(&self) -> usize {
        self.instances.len()
    }

    /// Iterate bound instances with their configuration keys.
    pub fn instances(&self) -> impl Iterator<Item = (&FlightConfigurationId, &MotorInstance)> {
        self.instances.iter()
    }
}
