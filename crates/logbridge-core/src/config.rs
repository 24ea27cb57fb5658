//! Logger and factory configuration types

use crate::{LevelInput, LoggerError, LoggerResult};
use serde::{Deserialize, Serialize};

/// Configuration for a single named logger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Logger name, copied into every record
    pub name: String,

    /// Threshold input; a missing or `null` field means "absent"
    #[serde(default)]
    pub level: LevelInput,
}

impl LoggerConfig {
    /// Create a new logger configuration
    pub fn new(name: impl Into<String>, level: impl Into<LevelInput>) -> Self {
        Self {
            name: name.into(),
            level: level.into(),
        }
    }

    /// Create configuration from JSON bytes
    ///
    /// Unlike the factory configuration there is no usable default here, so
    /// empty input is a configuration error.
    pub fn from_json(bytes: &[u8]) -> LoggerResult<Self> {
        if bytes.is_empty() {
            return Err(LoggerError::Config(
                "empty logger configuration".to_string(),
            ));
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Resolve the configured level into a threshold
    pub fn threshold(&self) -> LoggerResult<i32> {
        self.level.resolve()
    }
}

/// Configuration for a logger factory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryConfig {
    /// Install the error bridge when the first logger is created
    #[serde(default = "default_install_error_bridge")]
    pub install_error_bridge: bool,
}

fn default_install_error_bridge() -> bool {
    true
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            install_error_bridge: default_install_error_bridge(),
        }
    }
}

impl FactoryConfig {
    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }
}
