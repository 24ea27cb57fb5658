//! Registry of live loggers

use crate::logger::{Logger, LoggerInner};
use crate::sink::Sink;
use logbridge_core::{LevelInput, LoggerResult};
use parking_lot::RwLock;
use std::sync::{Arc, Weak};

/// Set of loggers that are still alive
///
/// Every logger is created through a registry, so no live logger can be
/// missing from it. The registry holds weak references only and does not
/// extend a logger's lifetime. A logger is visible to [`LoggerRegistry::live`]
/// before [`LoggerRegistry::create`] returns it.
pub struct LoggerRegistry {
    loggers: RwLock<Vec<Weak<LoggerInner>>>,
}

impl LoggerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            loggers: RwLock::new(Vec::new()),
        }
    }

    /// Create a logger and publish it
    ///
    /// Fails with [`LoggerError::MissingName`](logbridge_core::LoggerError::MissingName)
    /// for an empty name and with
    /// [`LoggerError::InvalidLevel`](logbridge_core::LoggerError::InvalidLevel)
    /// when the level input does not parse. Nothing is registered on failure.
    pub fn create<S>(
        &self,
        name: impl Into<String>,
        level: impl Into<LevelInput>,
        sink: S,
    ) -> LoggerResult<Logger>
    where
        S: Sink + 'static,
    {
        let logger = Logger::new(name, level, sink)?;
        self.register(&logger);
        Ok(logger)
    }

    /// Create and publish a logger writing to a sink shared with other loggers
    pub fn create_with_shared_sink(
        &self,
        name: impl Into<String>,
        level: impl Into<LevelInput>,
        sink: Arc<dyn Sink>,
    ) -> LoggerResult<Logger> {
        let logger = Logger::with_shared_sink(name, level, sink)?;
        self.register(&logger);
        Ok(logger)
    }

    /// Publish a fully built logger
    ///
    /// Entries whose logger has been dropped are pruned here. Registering the
    /// same logger twice has no effect.
    fn register(&self, logger: &Logger) {
        let weak = logger.downgrade();
        let mut guard = self.loggers.write();
        guard.retain(|existing| existing.strong_count() > 0);
        if !guard.iter().any(|existing| existing.ptr_eq(&weak)) {
            guard.push(weak);
        }
    }

    /// Snapshot of every live logger, in registration order
    ///
    /// The lock is released before this returns, so callers may emit to the
    /// loggers (and sinks may create new ones) without deadlocking.
    pub fn live(&self) -> Vec<Logger> {
        self.loggers
            .read()
            .iter()
            .filter_map(Weak::upgrade)
            .map(Logger::from_inner)
            .collect()
    }

    /// Number of live loggers
    pub fn len(&self) -> usize {
        self.loggers
            .read()
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
