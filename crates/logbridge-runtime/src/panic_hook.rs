//! Panic hook as the process's uncaught-error channel
//!
//! A panic is the native equivalent of an uncaught error. The channel installs
//! a single process-wide hook that reports every panic to its subscribers and
//! then hands the panic to the hook that was installed before it, so the
//! default report (or any custom hook) still runs.

use crate::channel::{ErrorChannel, ErrorHandler, ErrorNotification};
use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use std::any::Any;
use std::panic::{self, PanicHookInfo};
use std::sync::Arc;

/// Global panic channel
static PANIC_CHANNEL: OnceCell<Arc<PanicHookChannel>> = OnceCell::new();

/// Error channel fed by the process panic hook
///
/// A panic raised by a subscriber while the hook is running aborts the
/// process. Subscribers must report failures by other means.
pub struct PanicHookChannel {
    handlers: Arc<RwLock<Vec<ErrorHandler>>>,
    hook: OnceCell<()>,
}

impl PanicHookChannel {
    fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(Vec::new())),
            hook: OnceCell::new(),
        }
    }

    /// Get the process-wide panic channel
    pub fn global() -> Arc<PanicHookChannel> {
        PANIC_CHANNEL
            .get_or_init(|| Arc::new(PanicHookChannel::new()))
            .clone()
    }

    pub fn subscriber_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Check if the panic hook has been installed
    pub fn is_hooked(&self) -> bool {
        self.hook.get().is_some()
    }

    fn install_hook(&self) {
        self.hook.get_or_init(|| {
            let handlers = self.handlers.clone();
            let previous = panic::take_hook();

            panic::set_hook(Box::new(move |info| {
                let notification = notification_from_panic(info);
                let snapshot = handlers.read().clone();
                for handler in &snapshot {
                    handler(&notification);
                }
                previous(info);
            }));

            tracing::debug!("panic hook installed for uncaught-error reporting");
        });
    }
}

impl ErrorChannel for PanicHookChannel {
    fn subscribe(&self, handler: ErrorHandler) {
        self.handlers.write().push(handler);
        self.install_hook();
    }
}

/// Build a notification from the panic payload and location
fn notification_from_panic(info: &PanicHookInfo<'_>) -> ErrorNotification {
    let message = payload_message(info.payload());
    match info.location() {
        Some(location) => ErrorNotification::new(message, location.file(), location.line())
            .with_colno(location.column()),
        None => ErrorNotification::new(message, "<unknown>", 0),
    }
}

/// Convert a panic payload to a human-readable string
///
/// Handles the common payload types (&str, String) and falls back to a fixed
/// text for anything else.
fn payload_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "panic with unknown payload".to_string()
    }
}
