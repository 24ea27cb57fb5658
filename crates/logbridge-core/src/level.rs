//! Threshold input and parsing

use crate::{LoggerError, LoggerResult};
use serde::{Deserialize, Serialize};

/// Raw level value handed to the factory
///
/// Hosts pass levels as numbers, numeric strings or not at all. JSON
/// configuration maps `null` (or a missing field) to [`LevelInput::Absent`],
/// numbers to [`LevelInput::Number`] and strings to [`LevelInput::Text`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LevelInput {
    #[default]
    Absent,
    Number(i64),
    Text(String),
}

impl LevelInput {
    /// Resolve the input into a threshold
    ///
    /// Absent input resolves to `0`. Text is trimmed and parsed as a decimal
    /// integer; anything that does not parse is rejected rather than mapped
    /// to a default.
    pub fn resolve(&self) -> LoggerResult<i32> {
        match self {
            LevelInput::Absent => Ok(0),
            LevelInput::Number(value) => {
                i32::try_from(*value).map_err(|e| LoggerError::InvalidLevel {
                    input: value.to_string(),
                    reason: e.to_string(),
                })
            }
            LevelInput::Text(text) => {
                text.trim()
                    .parse::<i32>()
                    .map_err(|e| LoggerError::InvalidLevel {
                        input: text.clone(),
                        reason: e.to_string(),
                    })
            }
        }
    }
}

impl From<&str> for LevelInput {
    fn from(value: &str) -> Self {
        LevelInput::Text(value.to_string())
    }
}

impl From<String> for LevelInput {
    fn from(value: String) -> Self {
        LevelInput::Text(value)
    }
}

impl From<i32> for LevelInput {
    fn from(value: i32) -> Self {
        LevelInput::Number(i64::from(value))
    }
}

impl From<i64> for LevelInput {
    fn from(value: i64) -> Self {
        LevelInput::Number(value)
    }
}

impl From<u8> for LevelInput {
    fn from(value: u8) -> Self {
        LevelInput::Number(i64::from(value))
    }
}

impl From<Option<&str>> for LevelInput {
    fn from(value: Option<&str>) -> Self {
        value.map_or(LevelInput::Absent, LevelInput::from)
    }
}

impl From<Option<i32>> for LevelInput {
    fn from(value: Option<i32>) -> Self {
        value.map_or(LevelInput::Absent, LevelInput::from)
    }
}
