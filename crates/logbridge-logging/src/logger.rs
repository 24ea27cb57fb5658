//! Named loggers gated by a fixed threshold

use crate::sink::Sink;
use logbridge_core::{LevelInput, LogRecord, LoggerError, LoggerResult, Severity, SinkError};
use std::cell::Cell;
use std::sync::{Arc, Weak};

thread_local! {
    /// Number of sink calls in progress on this thread
    static EMIT_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks the current thread as inside a sink until dropped
struct EmitGuard;

impl EmitGuard {
    fn enter() -> Self {
        EMIT_DEPTH.with(|depth| depth.set(depth.get() + 1));
        EmitGuard
    }
}

impl Drop for EmitGuard {
    fn drop(&mut self) {
        EMIT_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Check if the current thread is inside a sink call
///
/// Stays `true` while a panic raised by the sink runs the panic hook.
pub fn emitting_on_current_thread() -> bool {
    EMIT_DEPTH.with(|depth| depth.get() > 0)
}

/// A named logger bound to a threshold and a sink
///
/// Cloning is cheap and every clone refers to the same logger. Loggers are
/// only built through [`LoggerRegistry::create`](crate::LoggerRegistry::create),
/// so each one is visible to the error bridge for as long as any clone is
/// held.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

pub(crate) struct LoggerInner {
    name: String,
    level: i32,
    sink: Arc<dyn Sink>,
}

impl Logger {
    /// Create a logger
    ///
    /// Fails with [`LoggerError::MissingName`] for an empty name and with
    /// [`LoggerError::InvalidLevel`] when the level input does not parse.
    pub(crate) fn new<S>(
        name: impl Into<String>,
        level: impl Into<LevelInput>,
        sink: S,
    ) -> LoggerResult<Self>
    where
        S: Sink + 'static,
    {
        Self::with_shared_sink(name, level, Arc::new(sink))
    }

    /// Create a logger writing to a sink shared with other loggers
    pub(crate) fn with_shared_sink(
        name: impl Into<String>,
        level: impl Into<LevelInput>,
        sink: Arc<dyn Sink>,
    ) -> LoggerResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(LoggerError::MissingName);
        }
        let level = level.into().resolve()?;

        Ok(Self {
            inner: Arc::new(LoggerInner { name, level, sink }),
        })
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Configured threshold
    pub fn level(&self) -> i32 {
        self.inner.level
    }

    /// Check if a call at `severity` would reach the sink
    pub fn is_enabled(&self, severity: Severity) -> bool {
        severity.admitted_by(self.inner.level)
    }

    /// Emit `msg` at `severity`
    ///
    /// Calls below the threshold return `Ok(())` without building a record.
    /// Otherwise the sink is invoked exactly once and its failure, if any, is
    /// returned to the caller.
    pub fn log(&self, severity: Severity, msg: impl Into<String>) -> LoggerResult<()> {
        if !self.is_enabled(severity) {
            return Ok(());
        }

        let record = LogRecord::new(self.name(), severity, msg);
        self.deliver(&record)?;
        Ok(())
    }

    pub fn error(&self, msg: impl Into<String>) -> LoggerResult<()> {
        self.log(Severity::Error, msg)
    }

    pub fn warn(&self, msg: impl Into<String>) -> LoggerResult<()> {
        self.log(Severity::Warn, msg)
    }

    pub fn info(&self, msg: impl Into<String>) -> LoggerResult<()> {
        self.log(Severity::Info, msg)
    }

    pub fn debug(&self, msg: impl Into<String>) -> LoggerResult<()> {
        self.log(Severity::Debug, msg)
    }

    /// Hand an already built record to the sink
    ///
    /// The record's `level` goes through the same gate as [`Logger::log`];
    /// records with an unknown level are never delivered. Returns whether the
    /// sink was invoked.
    pub fn deliver(&self, record: &LogRecord) -> Result<bool, SinkError> {
        let admitted = record
            .severity()
            .is_some_and(|severity| self.is_enabled(severity));
        if !admitted {
            return Ok(false);
        }

        let _guard = EmitGuard::enter();
        self.inner.sink.emit(record)?;
        Ok(true)
    }

    pub(crate) fn downgrade(&self) -> Weak<LoggerInner> {
        Arc::downgrade(&self.inner)
    }

    pub(crate) fn from_inner(inner: Arc<LoggerInner>) -> Self {
        Self { inner }
    }

    /// Check if two handles refer to the same logger
    pub fn ptr_eq(&self, other: &Logger) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.inner.name)
            .field("level", &self.inner.level)
            .finish_non_exhaustive()
    }
}
