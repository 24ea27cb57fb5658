//! Log records handed to sinks

use crate::Severity;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// A single emitted log message
///
/// The field names are the wire format consumed by sinks and must not
/// change: `{"name": ..., "level": ..., "msg": ..., "time": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    /// Name of the logger that produced the record
    pub name: String,

    /// Severity of this message (not the logger's threshold)
    pub level: u8,

    /// Message payload
    pub msg: String,

    /// Milliseconds since the Unix epoch at emission time
    pub time: u64,
}

impl LogRecord {
    /// Create a record stamped with the current time
    pub fn new(name: impl Into<String>, severity: Severity, msg: impl Into<String>) -> Self {
        Self::at(name, severity, msg, now_millis())
    }

    /// Create a record with an explicit timestamp
    pub fn at(
        name: impl Into<String>,
        severity: Severity,
        msg: impl Into<String>,
        time: u64,
    ) -> Self {
        Self {
            name: name.into(),
            level: severity.as_u8(),
            msg: msg.into(),
            time,
        }
    }

    /// Severity of the record, if `level` holds a known value
    pub fn severity(&self) -> Option<Severity> {
        Severity::from_u8(self.level)
    }

    /// Serialize the record to a single JSON line
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Current wall-clock time in milliseconds since the Unix epoch
///
/// A clock set before the epoch yields `0`.
pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
        .unwrap_or(0)
}
