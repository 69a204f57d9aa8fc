//! Registry of a rocket's flight configurations.

use heapless::{FnvIndexMap, String};

use crate::error::{truncated, Error, Result, RocketError};
use crate::rocket::FlightConfigurationId;
use crate::MAX_CONFIGURATIONS;

/// Maximum length of a custom configuration name in bytes.
pub const MAX_NAME_LEN: usize = 64;

/// Per-configuration metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightConfiguration {
    name: Option<String<MAX_NAME_LEN>>,
}

impl FlightConfiguration {
    /// Custom name, if one was set.
    pub fn name(&self) -> Option<&str> {
        self.name.as_ref().map(|n| n.as_str())
    }
}

/// The authoritative set of flight configurations of a rocket.
///
/// Configurations iterate in registration order; removing one moves the last entry
/// into its slot. One of them may be selected as the rocket's default configuration.
#[derive(Debug, Clone, Default)]
pub struct FlightConfigurationSet {
    configurations: FnvIndexMap<FlightConfigurationId, FlightConfiguration, MAX_CONFIGURATIONS>,
    selected: Option<FlightConfigurationId>,
}

impl FlightConfigurationSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `id`. Registering a known id is a no-op.
    ///
    /// Returns `true` if the id was newly added.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::TooManyConfigurations` if the set is full.
    pub fn create(&mut self, id: FlightConfigurationId) -> Result<bool> {
        if self.configurations.contains_key(&id) {
            return Ok(false);
        }
        self.configurations
            .insert(id, FlightConfiguration::default())
            .map_err(|_| Error::Rocket(RocketError::TooManyConfigurations))?;
        Ok(true)
    }

    /// Check if `id` is registered.
    pub fn contains(&self, id: &FlightConfigurationId) -> bool {
        self.configurations.contains_key(id)
    }

    /// Metadata for `id`.
    pub fn get(&self, id: &FlightConfigurationId) -> Option<&FlightConfiguration> {
        self.configurations.get(id)
    }

    /// Unregister `id`. Clears the selection if it pointed at `id`.
    pub fn remove(&mut self, id: &FlightConfigurationId) -> Option<FlightConfiguration> {
        if self.selected.as_ref() == Some(id) {
            self.selected = None;
        }
        self.configurations.remove(id)
    }

    /// Set or reset the custom name of `id`. `None` restores default naming.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not registered or the name is too long.
    pub fn set_name(&mut self, id: &FlightConfigurationId, name: Option<&str>) -> Result<()> {
        let config = self
            .configurations
            .get_mut(id)
            .ok_or_else(|| Error::Rocket(RocketError::UnknownConfiguration(truncated(id.as_str()))))?;
        config.name = match name {
            Some(n) => Some(String::try_from(n).map_err(|_| Error::Rocket(RocketError::NameTooLong))?),
            None => None,
        };
        Ok(())
    }

    /// Custom name of `id`, if registered and named.
    pub fn name(&self, id: &FlightConfigurationId) -> Option<&str> {
        self.configurations.get(id).and_then(FlightConfiguration::name)
    }

    /// Select `id` as the default configuration.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::UnknownConfiguration` if `id` is not registered.
    pub fn select(&mut self, id: &FlightConfigurationId) -> Result<()> {
        if !self.contains(id) {
            return Err(RocketError::UnknownConfiguration(truncated(id.as_str())).into());
        }
        self.selected = Some(id.clone());
        Ok(())
    }

    /// The selected configuration, or the first registered one.
    pub fn selected(&self) -> Option<&FlightConfigurationId> {
        self.selected.as_ref().or_else(|| self.configurations.keys().next())
    }

    /// Get the number of registered configurations.
    pub fn len(&self) -> usize {
        self.configurations.len()
    }

    /// Check if no configuration is registered.
    pub fn is_empty(&self) -> bool {
        self.configurations.is_empty()
    }

    /// Iterate configuration ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &FlightConfigurationId> {
        self.configurations.keys()
    }

    /// Iterate configurations with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (&FlightConfigurationId, &FlightConfiguration)> {
        self.configurations.iter()
    }
}
