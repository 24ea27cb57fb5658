//! logbridge-core - Core types shared by every logbridge crate
//!
//! This crate provides:
//! - [`Severity`], the fixed priority carried by each emission method
//! - [`LogRecord`], the value handed to sinks
//! - [`LevelInput`] and the threshold parsing rules
//! - [`LoggerError`] / [`SinkError`] for error handling
//! - [`LoggerConfig`] / [`FactoryConfig`] for configuration

mod config;
mod error;
mod level;
mod record;

pub use config::{FactoryConfig, LoggerConfig};
pub use error::{LoggerError, LoggerResult, SinkError};
pub use level::LevelInput;
pub use record::{LogRecord, now_millis};

/// Severity of a single log call
///
/// Lower numbers are more important. A logger forwards a call only when the
/// call's severity is less than or equal to its threshold, so a threshold of
/// `0` silences the logger and a threshold of `4` lets everything through.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Error = 1,
    Warn = 2,
    Info = 3,
    Debug = 4,
}

impl Severity {
    /// Every severity, most important first
    pub const ALL: [Severity; 4] = [
        Severity::Error,
        Severity::Warn,
        Severity::Info,
        Severity::Debug,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Severity::Error),
            2 => Some(Severity::Warn),
            3 => Some(Severity::Info),
            4 => Some(Severity::Debug),
            _ => None,
        }
    }

    /// Check whether a logger configured with `threshold` forwards this severity
    pub fn admitted_by(self, threshold: i32) -> bool {
        i32::from(self.as_u8()) <= threshold
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warn => write!(f, "WARN"),
            Severity::Info => write!(f, "INFO"),
            Severity::Debug => write!(f, "DEBUG"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        FactoryConfig, LevelInput, LogRecord, LoggerConfig, LoggerError, LoggerResult, Severity,
        SinkError,
    };
}
