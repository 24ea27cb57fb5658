#![allow(non_snake_case)]

use super::*;
use crate::channel::{ErrorChannel, ErrorHandler, ManualErrorChannel};
use logbridge_core::SinkError;
use logbridge_logging::{Logger, MemorySink, fallible};

fn test_error() -> ErrorNotification {
    ErrorNotification::new("Test error", "http://gardrtest.com/errorTest.js", 123)
}

fn create_test_bridge() -> (Arc<ErrorBridge>, Arc<ManualErrorChannel>, HostCapabilities) {
    let registry = Arc::new(LoggerRegistry::new());
    let bridge = Arc::new(ErrorBridge::new(registry));
    let channel = Arc::new(ManualErrorChannel::new());
    let caps = HostCapabilities::none().with_error_channel(channel.clone());
    (bridge, channel, caps)
}

fn register(bridge: &ErrorBridge, name: &str, level: &str) -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = bridge.registry().create(name, level, sink.clone()).unwrap();
    (logger, sink)
}

// Installation

#[test]
fn ErrorBridge___new___starts_uninstalled() {
    let (bridge, _channel, _caps) = create_test_bridge();

    assert_eq!(bridge.state(), BridgeState::Uninstalled);
}

#[test]
fn ErrorBridge___install___subscribes_to_channel() {
    let (bridge, channel, caps) = create_test_bridge();

    let state = bridge.install(&caps);

    assert_eq!(state, BridgeState::Installed);
    assert_eq!(bridge.state(), BridgeState::Installed);
    assert_eq!(channel.subscriber_count(), 1);
}

#[test]
fn ErrorBridge___install_twice___subscribes_once() {
    let (bridge, channel, caps) = create_test_bridge();
    let (_logger, sink) = register(&bridge, "error_test", "1");

    bridge.install(&caps);
    bridge.install(&caps);
    channel.notify(&test_error());

    assert_eq!(channel.subscriber_count(), 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn ErrorBridge___install_without_channel___stays_uninstalled() {
    let (bridge, _channel, _caps) = create_test_bridge();

    let state = bridge.install(&HostCapabilities::none());

    assert_eq!(state, BridgeState::Uninstalled);
}

#[test]
fn ErrorBridge___install_without_channel___direct_logging_still_works() {
    let (bridge, _channel, _caps) = create_test_bridge();
    let (logger, sink) = register(&bridge, "direct", "4");

    bridge.install(&HostCapabilities::none());
    logger.debug("still here").unwrap();

    assert_eq!(sink.len(), 1);
}

#[test]
fn ErrorBridge___install_after_missing_channel___can_still_install() {
    let (bridge, channel, caps) = create_test_bridge();

    bridge.install(&HostCapabilities::none());
    let state = bridge.install(&caps);

    assert_eq!(state, BridgeState::Installed);
    assert_eq!(channel.subscriber_count(), 1);
}

// Forwarding

#[test]
fn ErrorBridge___notification___produces_error_record() {
    let (bridge, channel, caps) = create_test_bridge();
    let (_logger, sink) = register(&bridge, "error_test", "1");
    bridge.install(&caps);
    let start_time = now_millis();

    channel.notify(&test_error());

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].level, 1);
    assert_eq!(records[0].name, "error_test");
    assert_eq!(
        records[0].msg,
        "Test error (http://gardrtest.com/errorTest.js:123)"
    );
    assert!(records[0].time >= start_time);
}

#[test]
fn ErrorBridge___dispatch___skips_silenced_loggers() {
    let (bridge, _channel, _caps) = create_test_bridge();
    let (_silent, silent_sink) = register(&bridge, "silent", "0");
    let (_verbose, verbose_sink) = register(&bridge, "verbose", "4");

    let delivered = bridge.dispatch(&test_error());

    assert_eq!(delivered, 1);
    assert!(silent_sink.is_empty());
    assert_eq!(verbose_sink.records()[0].name, "verbose");
}

#[test]
fn ErrorBridge___dispatch___shares_timestamp_across_loggers() {
    let (bridge, _channel, _caps) = create_test_bridge();
    let (_a, sink_a) = register(&bridge, "a", "1");
    let (_b, sink_b) = register(&bridge, "b", "3");

    bridge.dispatch(&test_error());

    assert_eq!(sink_a.records()[0].time, sink_b.records()[0].time);
}

#[test]
fn ErrorBridge___dispatch___reaches_logger_registered_after_install() {
    let (bridge, channel, caps) = create_test_bridge();
    bridge.install(&caps);
    let (_late, sink) = register(&bridge, "late", "2");

    channel.notify(&test_error());

    assert_eq!(sink.len(), 1);
}

#[test]
fn ErrorBridge___dispatch___ignores_dropped_loggers() {
    let (bridge, _channel, _caps) = create_test_bridge();
    let (logger, sink) = register(&bridge, "gone", "4");
    drop(logger);

    let delivered = bridge.dispatch(&test_error());

    assert_eq!(delivered, 0);
    assert!(sink.is_empty());
}

// Sink isolation

#[test]
fn ErrorBridge___dispatch___failing_sink_does_not_block_others() {
    let (bridge, _channel, _caps) = create_test_bridge();
    let _failing = bridge
        .registry()
        .create(
            "failing",
            "1",
            fallible(|_record: &LogRecord| Err(SinkError::Rejected("down".into()))),
        )
        .unwrap();
    let (_ok, sink) = register(&bridge, "healthy", "1");

    let delivered = bridge.dispatch(&test_error());

    assert_eq!(delivered, 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn ErrorBridge___dispatch___panicking_sink_is_contained() {
    let (bridge, _channel, _caps) = create_test_bridge();
    let _panicking = bridge
        .registry()
        .create("panicking", "1", |_record: &LogRecord| {
            panic!("sink exploded");
        })
        .unwrap();
    let (_ok, sink) = register(&bridge, "healthy", "1");

    let delivered = bridge.dispatch(&test_error());

    assert_eq!(delivered, 1);
    assert_eq!(sink.len(), 1);
}

#[test]
fn ErrorBridge___dispatch_from_inside_sink___is_not_forwarded() {
    let (bridge, _channel, _caps) = create_test_bridge();
    let nested = Arc::new(std::sync::atomic::AtomicUsize::new(usize::MAX));
    let seen = nested.clone();
    let inner_bridge = bridge.clone();
    let _reporter = bridge
        .registry()
        .create("reporter", "1", move |_record: &LogRecord| {
            let delivered = inner_bridge.dispatch(&test_error());
            seen.store(delivered, std::sync::atomic::Ordering::SeqCst);
        })
        .unwrap();
    let (_ok, sink) = register(&bridge, "healthy", "1");

    let delivered = bridge.dispatch(&test_error());

    assert_eq!(delivered, 2);
    assert_eq!(nested.load(std::sync::atomic::Ordering::SeqCst), 0);
    assert_eq!(sink.len(), 1);
}

/// Channel that installs the bridge again while subscribing
struct ReentrantChannel {
    inner: ManualErrorChannel,
    target: Mutex<Option<(Arc<ErrorBridge>, HostCapabilities)>>,
    nested: Mutex<Option<BridgeState>>,
}

impl ErrorChannel for ReentrantChannel {
    fn subscribe(&self, handler: ErrorHandler) {
        let target = self.target.lock().clone();
        if let Some((bridge, caps)) = target {
            *self.nested.lock() = Some(bridge.install(&caps));
        }
        self.inner.subscribe(handler);
    }
}

#[test]
fn ErrorBridge___install_reentered_while_subscribing___does_not_deadlock() {
    let registry = Arc::new(LoggerRegistry::new());
    let bridge = Arc::new(ErrorBridge::new(registry));
    let channel = Arc::new(ReentrantChannel {
        inner: ManualErrorChannel::new(),
        target: Mutex::new(None),
        nested: Mutex::new(None),
    });
    let caps = HostCapabilities::none().with_error_channel(channel.clone());
    *channel.target.lock() = Some((bridge.clone(), caps.clone()));
    let (_logger, sink) = register(&bridge, "error_test", "1");

    assert_eq!(bridge.install(&caps), BridgeState::Installed);

    assert_eq!(*channel.nested.lock(), Some(BridgeState::Installed));
    assert_eq!(channel.inner.subscriber_count(), 1);
    channel.inner.notify(&test_error());
    assert_eq!(sink.len(), 1);
}
