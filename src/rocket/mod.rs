//! Rocket model for motor-mount.
//!
//! Flight configuration ids, motor instances, motor mounts, and the rocket that owns
//! the configuration set.

mod configuration;
mod id;
mod ignition;
mod instance;
mod mount;
mod vehicle;

pub use configuration::{FlightConfiguration, FlightConfigurationSet, MAX_NAME_LEN};
pub use id::{FlightConfigurationId, MAX_ID_LEN};
pub use ignition::{IgnitionEvent, UnknownIgnitionEvent};
pub use instance::MotorInstance;
pub use mount::MotorMount;
pub use vehicle::{MountId, Rocket, MAX_DISPLAY_NAME_LEN};
