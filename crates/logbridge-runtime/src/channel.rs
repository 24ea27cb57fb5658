//! Host error notifications and the channels that deliver them

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An uncaught error reported by the host
///
/// Hosts that describe errors as JSON objects can deserialize this directly;
/// fields other than `message`, `filename`, `lineno` and `colno` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorNotification {
    pub message: String,

    /// Source location (file or URL) the error was raised from
    #[serde(default)]
    pub filename: String,

    #[serde(default)]
    pub lineno: u32,

    #[serde(default)]
    pub colno: Option<u32>,
}

impl ErrorNotification {
    pub fn new(message: impl Into<String>, filename: impl Into<String>, lineno: u32) -> Self {
        Self {
            message: message.into(),
            filename: filename.into(),
            lineno,
            colno: None,
        }
    }

    pub fn with_colno(mut self, colno: u32) -> Self {
        self.colno = Some(colno);
        self
    }

    /// Record message for this notification: `message (filename:lineno[:colno])`
    pub fn describe(&self) -> String {
        match self.colno {
            Some(colno) => format!(
                "{} ({}:{}:{})",
                self.message, self.filename, self.lineno, colno
            ),
            None => format!("{} ({}:{})", self.message, self.filename, self.lineno),
        }
    }
}

/// Callback registered on an [`ErrorChannel`]
pub type ErrorHandler = Arc<dyn Fn(&ErrorNotification) + Send + Sync>;

/// Host capability that reports uncaught errors
///
/// Subscriptions are permanent; a channel never drops a handler.
pub trait ErrorChannel: Send + Sync {
    fn subscribe(&self, handler: ErrorHandler);
}

/// Error channel driven by the embedder
///
/// Hosts with their own event loop call [`ManualErrorChannel::notify`] from
/// their uncaught-error path.
pub struct ManualErrorChannel {
    handlers: RwLock<Vec<ErrorHandler>>,
}

impl ManualErrorChannel {
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Deliver a notification to every subscriber
    ///
    /// Returns the number of handlers invoked.
    pub fn notify(&self, notification: &ErrorNotification) -> usize {
        let handlers = self.handlers.read().clone();
        for handler in &handlers {
            handler(notification);
        }
        handlers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }
}

impl Default for ManualErrorChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorChannel for ManualErrorChannel {
    fn subscribe(&self, handler: ErrorHandler) {
        self.handlers.write().push(handler);
    }
}
