//! Bridge from host error notifications to live loggers

use crate::capabilities::HostCapabilities;
use crate::channel::ErrorNotification;
use logbridge_core::{LogRecord, Severity, now_millis};
use logbridge_logging::{LoggerRegistry, emitting_on_current_thread};
use parking_lot::Mutex;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Installation state of an [`ErrorBridge`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeState {
    Uninstalled,
    Installed,
}

/// Forwards uncaught errors to every live logger
///
/// The bridge subscribes to the host's error channel at most once. Each
/// notification becomes one [`Severity::Error`] record per logger whose
/// threshold admits it. Failures of individual sinks are logged and dropped
/// so one broken sink cannot stop error reporting. Errors raised while a sink
/// is running on the same thread are not forwarded, since that sink may
/// still hold its own locks.
pub struct ErrorBridge {
    registry: Arc<LoggerRegistry>,
    state: Mutex<BridgeState>,
}

impl ErrorBridge {
    /// Severity of every record produced by the bridge
    pub const SEVERITY: Severity = Severity::Error;

    pub fn new(registry: Arc<LoggerRegistry>) -> Self {
        Self {
            registry,
            state: Mutex::new(BridgeState::Uninstalled),
        }
    }

    pub fn state(&self) -> BridgeState {
        *self.state.lock()
    }

    pub fn registry(&self) -> &Arc<LoggerRegistry> {
        &self.registry
    }

    /// Subscribe to the host's error channel
    ///
    /// Calling this again after a successful install does nothing. When the
    /// host has no error channel the bridge stays uninstalled.
    pub fn install(&self, capabilities: &HostCapabilities) -> BridgeState {
        if self.state() == BridgeState::Installed {
            return BridgeState::Installed;
        }

        let Some(channel) = capabilities.error_channel() else {
            tracing::debug!("host has no error channel, error bridge not installed");
            return self.state();
        };

        {
            let mut state = self.state.lock();
            if *state == BridgeState::Installed {
                return BridgeState::Installed;
            }
            *state = BridgeState::Installed;
        }

        // The lock is released here: subscribers and tracing layers may
        // create loggers, which installs again.
        let registry = self.registry.clone();
        channel.subscribe(Arc::new(move |notification: &ErrorNotification| {
            dispatch(&registry, notification);
        }));

        tracing::debug!("error bridge installed");
        BridgeState::Installed
    }

    /// Forward one notification to the live loggers
    ///
    /// Returns the number of sinks that accepted the record.
    pub fn dispatch(&self, notification: &ErrorNotification) -> usize {
        dispatch(&self.registry, notification)
    }
}

fn dispatch(registry: &LoggerRegistry, notification: &ErrorNotification) -> usize {
    if emitting_on_current_thread() {
        tracing::warn!("uncaught error raised inside a sink, not forwarded");
        return 0;
    }

    let time = now_millis();
    let msg = notification.describe();
    let mut delivered = 0;

    for logger in registry.live() {
        if !logger.is_enabled(ErrorBridge::SEVERITY) {
            continue;
        }

        let record = LogRecord::at(logger.name(), ErrorBridge::SEVERITY, msg.clone(), time);
        match panic::catch_unwind(AssertUnwindSafe(|| logger.deliver(&record))) {
            Ok(Ok(true)) => delivered += 1,
            Ok(Ok(false)) => {}
            Ok(Err(e)) => {
                tracing::warn!(
                    logger = logger.name(),
                    error = %e,
                    "sink failed while reporting uncaught error"
                );
            }
            Err(_) => {
                tracing::warn!(
                    logger = logger.name(),
                    "sink panicked while reporting uncaught error"
                );
            }
        }
    }

    delivered
}

#[cfg(test)]
#[path = "bridge/bridge_tests.rs"]
mod bridge_tests;
