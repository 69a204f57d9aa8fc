//! Import module for motor-mount.
//!
//! Turns the markup describing one mount's motors and ignition settings into
//! mutations of a [`MotorMount`](crate::rocket::MotorMount) and its rocket's
//! configuration set. An external tokenizer drives a [`MountSession`]; with the
//! `std` feature, [`import_mount_xml`] does so from an XML string.

mod attributes;
mod handler;
mod ignition;
mod motor;
mod mount;
mod session;
#[cfg(feature = "std")]
mod xml;

pub use attributes::{Attributes, MAX_ATTRIBUTES};
pub use handler::{Delegate, ElementHandler};
pub use ignition::IgnitionConfigurationHandler;
pub use motor::MotorHandler;
pub use mount::{MotorMountHandler, MountState, TextField};
pub use session::{MountSession, MAX_CONTENT_LEN};

#[cfg(feature = "std")]
pub use xml::import_mount_xml;
