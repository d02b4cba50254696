//! Buffer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{EndlessError, Result};

/// Default capacity in bytes used when a config omits it.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Controls how an [`Endless`](crate::Endless) buffer is built.
///
/// Deserializes from any serde format, so it can sit inside a larger
/// application config:
///
/// ```
/// use endless::{Config, Endless};
///
/// let cfg: Config = serde_json::from_str(r#"{ "capacity": 64 }"#).unwrap();
/// let buf = Endless::from_config(&cfg).unwrap();
/// assert_eq!(buf.capacity(), 64);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Size of the storage in bytes. Must be positive.
    /// Default: 4096.
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    /// Creates a config with the given capacity.
    pub fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Checks that the config describes a usable buffer.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(EndlessError::InvalidCapacity(self.capacity));
        }
        Ok(())
    }
}
