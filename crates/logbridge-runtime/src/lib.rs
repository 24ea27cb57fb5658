//! logbridge-runtime - Uncaught-error reporting for logbridge
//!
//! This crate provides:
//! - [`ErrorChannel`], the host capability that reports uncaught errors
//! - [`PanicHookChannel`] and [`ManualErrorChannel`] implementations
//! - [`HostCapabilities`] for deciding which channel a process has
//! - [`ErrorBridge`], which turns each notification into error records for
//!   every live logger

mod bridge;
mod capabilities;
mod channel;
mod panic_hook;

pub use bridge::{BridgeState, ErrorBridge};
pub use capabilities::HostCapabilities;
pub use channel::{ErrorChannel, ErrorHandler, ErrorNotification, ManualErrorChannel};
pub use panic_hook::PanicHookChannel;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        BridgeState, ErrorBridge, ErrorChannel, ErrorNotification, HostCapabilities,
        ManualErrorChannel, PanicHookChannel,
    };
}
