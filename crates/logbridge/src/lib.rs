//! # logbridge
//!
//! An embeddable leveled logger that also turns uncaught errors into log
//! records.
//!
//! logbridge provides:
//! - Named loggers with a fixed numeric threshold
//! - Structured records (`name`, `level`, `msg`, `time`) handed to a sink
//! - Automatic reporting of uncaught errors (panics, or whatever the host
//!   reports) to every live logger
//!
//! ## Levels
//!
//! | method    | severity |
//! |-----------|----------|
//! | `error`   | 1        |
//! | `warn`    | 2        |
//! | `info`    | 3        |
//! | `debug`   | 4        |
//!
//! A call reaches the sink when its severity is less than or equal to the
//! logger's threshold. A threshold of `0` (the default) silences the logger.
//!
//! ## Quick Start
//!
//! ```
//! use logbridge::prelude::*;
//!
//! let sink = MemorySink::new();
//! let log = logbridge::create("app", "4", sink.clone())?;
//!
//! log.debug("started")?;
//!
//! assert_eq!(sink.records()[0].msg, "started");
//! # Ok::<(), logbridge::LoggerError>(())
//! ```
//!
//! ## Host error channels
//!
//! The process-wide factory reports panics. Hosts that run their own event
//! loop inject a [`ManualErrorChannel`] instead:
//!
//! ```
//! use logbridge::prelude::*;
//! use std::sync::Arc;
//!
//! let channel = Arc::new(ManualErrorChannel::new());
//! let factory = LoggerFactory::new(HostCapabilities::none().with_error_channel(channel.clone()));
//!
//! let sink = MemorySink::new();
//! let _log = factory.create("error_test", "1", sink.clone())?;
//!
//! channel.notify(&ErrorNotification::new("Test error", "app.js", 123));
//!
//! assert_eq!(sink.records()[0].level, 1);
//! # Ok::<(), logbridge::LoggerError>(())
//! ```
//!
//! ## Crate Structure
//!
//! - [`logbridge_core`] - Records, severities, configuration and errors
//! - [`logbridge_logging`] - Loggers, sinks and the logger registry
//! - [`logbridge_runtime`] - Host error channels and the error bridge

mod factory;

pub use factory::{LoggerFactory, create};

// Re-export core types
pub use logbridge_core::{
    FactoryConfig, LevelInput, LogRecord, LoggerConfig, LoggerError, LoggerResult, Severity,
    SinkError, now_millis,
};

// Re-export logging types
pub use logbridge_logging::{
    FallibleSink, JsonLinesSink, Logger, LoggerRegistry, MemorySink, RecordLayer, Sink, fallible,
    init_logging,
};

// Re-export runtime types
pub use logbridge_runtime::{
    BridgeState, ErrorBridge, ErrorChannel, ErrorHandler, ErrorNotification, HostCapabilities,
    ManualErrorChannel, PanicHookChannel,
};

// Re-export common dependencies that embedders need
pub use serde_json;
pub use tracing;

/// Prelude module for convenient imports.
///
/// Use `use logbridge::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        BridgeState, ErrorChannel, ErrorNotification, HostCapabilities, JsonLinesSink,
        LevelInput, LogRecord, Logger, LoggerConfig, LoggerError, LoggerFactory, LoggerResult,
        ManualErrorChannel, MemorySink, Severity, Sink, create,
    };
}
