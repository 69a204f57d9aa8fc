//! The rocket: motor mounts plus the configurations they are keyed by.

use heapless::{String, Vec};

use crate::catalog::MAX_LABEL_LEN;
use crate::error::{truncated, Error, Result, RocketError};
use crate::rocket::{FlightConfigurationId, FlightConfigurationSet, MotorMount};
use crate::MAX_MOUNTS;

/// Capacity of a configuration display name: one motor label per mount, separators and brackets.
pub const MAX_DISPLAY_NAME_LEN: usize = 2 + MAX_MOUNTS * (MAX_LABEL_LEN + 2);

/// Index of a motor mount within its rocket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(pub usize);

/// A rocket design.
///
/// The rocket owns the authoritative configuration set; mounts only ever hold
/// instances for ids registered here.
#[derive(Debug, Clone)]
pub struct Rocket {
    name: String<32>,
    mounts: Vec<MotorMount, MAX_MOUNTS>,
    configurations: FlightConfigurationSet,
}

impl Rocket {
    /// Create a rocket with no mounts and no configurations.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::NameTooLong` if `name` exceeds 32 bytes.
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: String::try_from(name).map_err(|_| Error::Rocket(RocketError::NameTooLong))?,
            mounts: Vec::new(),
            configurations: FlightConfigurationSet::new(),
        })
    }

    /// Rocket name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Add a component that can act as a motor mount.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is too long or the rocket is full.
    pub fn add_mount(&mut self, name: &str) -> Result<MountId> {
        let mount = MotorMount::new(name)?;
        let index = self.mounts.len();
        self.mounts
            .push(mount)
            .map_err(|_| Error::Rocket(RocketError::TooManyMounts))?;
        Ok(MountId(index))
    }

    /// Mount by id.
    pub fn mount(&self, id: MountId) -> Option<&MotorMount> {
        self.mounts.get(id.0)
    }

    /// Mutable mount by id.
    pub fn mount_mut(&mut self, id: MountId) -> Option<&mut MotorMount> {
        self.mounts.get_mut(id.0)
    }

    /// Iterate mounts with their ids.
    pub fn mounts(&self) -> impl Iterator<Item = (MountId, &MotorMount)> {
        self.mounts.iter().enumerate().map(|(i, m)| (MountId(i), m))
    }

    /// The configuration set.
    pub fn configurations(&self) -> &FlightConfigurationSet {
        &self.configurations
    }

    /// Mutable access to one mount together with the configuration set.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::UnknownMount` if `id` does not exist.
    pub fn mount_and_configurations_mut(
        &mut self,
        id: MountId,
    ) -> Result<(&mut MotorMount, &mut FlightConfigurationSet)> {
        let mount = self
            .mounts
            .get_mut(id.0)
            .ok_or(Error::Rocket(RocketError::UnknownMount(id.0)))?;
        Ok((mount, &mut self.configurations))
    }

    /// Register a flight configuration. Idempotent.
    ///
    /// Returns `true` if the id was newly added.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::TooManyConfigurations` if the set is full.
    pub fn create_flight_configuration(&mut self, id: FlightConfigurationId) -> Result<bool> {
        self.configurations.create(id)
    }

    /// Remove a configuration and every mount's instance for it.
    ///
    /// Returns `true` if the configuration existed.
    pub fn remove_flight_configuration(&mut self, id: &FlightConfigurationId) -> bool {
        for mount in self.mounts.iter_mut() {
            mount.remove_motor_instance(id);
        }
        self.configurations.remove(id).is_some()
    }

    /// Set or reset the custom name of a configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not registered or the name is too long.
    pub fn set_flight_configuration_name(
        &mut self,
        id: &FlightConfigurationId,
        name: Option<&str>,
    ) -> Result<()> {
        self.configurations.set_name(id, name)
    }

    /// Display name of a configuration.
    ///
    /// The custom name if one is set, otherwise the motors of every mount with their
    /// ejection delays, e.g. `[C6-5; D12-P]`, or `[No motors]`.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::UnknownConfiguration` if `id` is not registered, or
    /// `RocketError::NameTooLong` if an ejection delay is too large to render.
    pub fn flight_configuration_name(
        &self,
        id: &FlightConfigurationId,
    ) -> Result<String<MAX_DISPLAY_NAME_LEN>> {
        if !self.configurations.contains(id) {
            return Err(RocketError::UnknownConfiguration(truncated(id.as_str())).into());
        }
        let too_long = |_: ()| Error::Rocket(RocketError::NameTooLong);
        if let Some(name) = self.configurations.name(id) {
            return String::try_from(name).map_err(too_long);
        }

        let mut out = String::new();
        out.push('[').map_err(too_long)?;
        let mut any = false;
        for mount in self.mounts.iter().filter(|m| m.is_motor_mount()) {
            let Some(instance) = mount.bound_instance(id) else {
                continue;
            };
            let Some(motor) = instance.motor() else {
                continue;
            };
            let label = motor
                .designation_with_delay(instance.ejection_delay())
                .ok_or(Error::Rocket(RocketError::NameTooLong))?;
            if any {
                out.push_str("; ").map_err(too_long)?;
            }
            out.push_str(&label).map_err(too_long)?;
            any = true;
        }
        if !any {
            out.push_str("No motors").map_err(too_long)?;
        }
        out.push(']').map_err(too_long)?;
        Ok(out)
    }
}
