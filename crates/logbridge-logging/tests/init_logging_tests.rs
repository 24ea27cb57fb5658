//! Global subscriber installation
//!
//! `init_logging` sets the process-wide tracing subscriber, so it is tested in
//! its own binary.

use logbridge_logging::{LoggerRegistry, MemorySink, init_logging};

#[test]
fn test_init_logging_routes_tracing_events_to_logger() {
    let registry = LoggerRegistry::new();
    let sink = MemorySink::new();
    let logger = registry.create("tracing_bridge", "2", sink.clone()).unwrap();

    init_logging(logger.clone());
    // A second call keeps the first subscriber.
    init_logging(registry.create("ignored", "4", MemorySink::new()).unwrap());

    tracing::error!(code = 7, "disk full");
    tracing::warn!("retrying");
    tracing::info!("dropped by threshold");

    let records = sink.records();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].level, 1);
    assert_eq!(records[0].name, "tracing_bridge");
    assert_eq!(records[0].msg, "disk full code=7");
    assert_eq!(records[1].msg, "retrying");
}
