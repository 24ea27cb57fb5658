//! logbridge-logging - Named leveled loggers and their sinks
//!
//! This crate provides:
//! - [`Logger`], a named logger gated by a fixed threshold
//! - [`Sink`], the seam every emitted [`LogRecord`] goes through
//! - [`LoggerRegistry`], which creates every logger and is consulted by the
//!   error bridge
//! - [`RecordLayer`], a tracing layer that routes `tracing` events into a logger

mod layer;
mod logger;
mod registry;
mod sink;

pub use layer::{RecordLayer, init_logging};
pub use logger::{Logger, emitting_on_current_thread};
pub use logbridge_core::{LevelInput, LogRecord, LoggerError, LoggerResult, Severity, SinkError};
pub use registry::LoggerRegistry;
pub use sink::{FallibleSink, JsonLinesSink, MemorySink, Sink, fallible};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        LevelInput, LogRecord, Logger, LoggerRegistry, MemorySink, Severity, Sink, init_logging,
    };
}
