//! Logger factory

use logbridge_core::{FactoryConfig, LevelInput, LoggerConfig, LoggerResult};
use logbridge_logging::{Logger, LoggerRegistry, Sink};
use logbridge_runtime::{BridgeState, ErrorBridge, HostCapabilities};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Global factory used by [`create`]
static FACTORY: OnceCell<LoggerFactory> = OnceCell::new();

/// Creates loggers and wires them to the error bridge
///
/// Every logger a factory creates is registered before it is returned, so
/// the next uncaught error reaches it. The factory's bridge is installed on
/// the first successful [`LoggerFactory::create`] unless disabled in
/// [`FactoryConfig`].
pub struct LoggerFactory {
    config: FactoryConfig,
    capabilities: HostCapabilities,
    registry: Arc<LoggerRegistry>,
    bridge: ErrorBridge,
}

impl LoggerFactory {
    pub fn new(capabilities: HostCapabilities) -> Self {
        Self::with_config(FactoryConfig::default(), capabilities)
    }

    pub fn with_config(config: FactoryConfig, capabilities: HostCapabilities) -> Self {
        let registry = Arc::new(LoggerRegistry::new());
        let bridge = ErrorBridge::new(registry.clone());
        Self {
            config,
            capabilities,
            registry,
            bridge,
        }
    }

    /// Get the process-wide factory
    ///
    /// Built on first use with [`HostCapabilities::detect`].
    pub fn global() -> &'static LoggerFactory {
        FACTORY.get_or_init(|| LoggerFactory::new(HostCapabilities::detect()))
    }

    /// Create a registered logger
    pub fn create<S>(
        &self,
        name: impl Into<String>,
        level: impl Into<LevelInput>,
        sink: S,
    ) -> LoggerResult<Logger>
    where
        S: Sink + 'static,
    {
        let logger = self.registry.create(name, level, sink)?;
        self.activate_bridge();
        Ok(logger)
    }

    /// Create a registered logger writing to a shared sink
    pub fn create_with_shared_sink(
        &self,
        name: impl Into<String>,
        level: impl Into<LevelInput>,
        sink: Arc<dyn Sink>,
    ) -> LoggerResult<Logger> {
        let logger = self.registry.create_with_shared_sink(name, level, sink)?;
        self.activate_bridge();
        Ok(logger)
    }

    /// Create a registered logger from configuration
    pub fn create_from_config<S>(&self, config: &LoggerConfig, sink: S) -> LoggerResult<Logger>
    where
        S: Sink + 'static,
    {
        self.create(config.name.clone(), config.level.clone(), sink)
    }

    /// Install the error bridge now instead of on first create
    pub fn install_error_bridge(&self) -> BridgeState {
        self.bridge.install(&self.capabilities)
    }

    pub fn bridge_state(&self) -> BridgeState {
        self.bridge.state()
    }

    pub fn registry(&self) -> &Arc<LoggerRegistry> {
        &self.registry
    }

    pub fn capabilities(&self) -> &HostCapabilities {
        &self.capabilities
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    fn activate_bridge(&self) {
        if self.config.install_error_bridge {
            self.bridge.install(&self.capabilities);
        }
    }
}

/// Create a logger with the process-wide factory
///
/// # Example
///
/// ```
/// use logbridge::LogRecord;
///
/// let log = logbridge::create("no_loglevel_test", None::<&str>, |_record: &LogRecord| {})?;
/// assert_eq!(log.level(), 0);
/// # Ok::<(), logbridge::LoggerError>(())
/// ```
pub fn create<S>(
    name: impl Into<String>,
    level: impl Into<LevelInput>,
    sink: S,
) -> LoggerResult<Logger>
where
    S: Sink + 'static,
{
    LoggerFactory::global().create(name, level, sink)
}
