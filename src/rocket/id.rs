//! Flight configuration identifiers.

use core::fmt;

use heapless::String;

use crate::error::{truncated, Result, RocketError};

/// Maximum length of a flight configuration identifier in bytes.
pub const MAX_ID_LEN: usize = 64;

/// Key distinguishing one flight configuration of a rocket from another.
///
/// Only valid keys can be constructed: non-empty, at most [`MAX_ID_LEN`] bytes of
/// ASCII letters, digits, `-`, `_` or `.`, and not one of the reserved sentinel
/// tokens. UUIDs and short identifiers like `cfg-A` both qualify.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightConfigurationId(String<MAX_ID_LEN>);

impl FlightConfigurationId {
    /// Sentinel produced by failed lookups.
    pub const ERROR_KEY: &'static str = "error_key";
    /// Sentinel standing for the mount-wide default value.
    pub const DEFAULT_VALUE_KEY: &'static str = "default_value";

    /// Validate a raw token and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `RocketError::InvalidConfigurationId` if the token fails validation.
    pub fn new(raw: &str) -> Result<Self> {
        if !Self::is_valid_key(raw) {
            return Err(RocketError::InvalidConfigurationId(truncated(raw)).into());
        }
        String::try_from(raw)
            .map(Self)
            .map_err(|_| RocketError::InvalidConfigurationId(truncated(raw)).into())
    }

    /// Check whether `raw` would be accepted by [`FlightConfigurationId::new`].
    pub fn is_valid_key(raw: &str) -> bool {
        !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && raw != Self::ERROR_KEY
            && raw != Self::DEFAULT_VALUE_KEY
            && raw
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FlightConfigurationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for FlightConfigurationId {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for FlightConfigurationId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
