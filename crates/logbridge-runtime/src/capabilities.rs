//! Host capability detection

use crate::channel::ErrorChannel;
use crate::panic_hook::PanicHookChannel;
use std::sync::Arc;

/// What the host environment offers the logger
///
/// The error bridge is only installed when an error channel is present; a
/// host without one still gets fully working direct logging.
#[derive(Clone, Default)]
pub struct HostCapabilities {
    error_channel: Option<Arc<dyn ErrorChannel>>,
}

impl HostCapabilities {
    /// Capabilities of the current process
    ///
    /// Native processes report uncaught errors through the panic hook.
    pub fn detect() -> Self {
        Self::none().with_error_channel(PanicHookChannel::global())
    }

    /// A host with no error channel
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_error_channel(mut self, channel: Arc<dyn ErrorChannel>) -> Self {
        self.error_channel = Some(channel);
        self
    }

    pub fn error_channel(&self) -> Option<&Arc<dyn ErrorChannel>> {
        self.error_channel.as_ref()
    }

    pub fn has_error_channel(&self) -> bool {
        self.error_channel.is_some()
    }
}

impl std::fmt::Debug for HostCapabilities {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostCapabilities")
            .field("error_channel", &self.has_error_channel())
            .finish()
    }
}
