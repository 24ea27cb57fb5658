//! Output sinks for log records

use logbridge_core::{LogRecord, SinkError};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;

/// Destination for emitted records
///
/// A sink is invoked synchronously, once per record that passes a logger's
/// threshold. Any `Fn(&LogRecord) + Send + Sync` closure is an infallible
/// sink; use [`fallible`] to wrap a closure that can fail.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError>;
}

impl<F> Sink for F
where
    F: Fn(&LogRecord) + Send + Sync,
{
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError> {
        self(record);
        Ok(())
    }
}

/// Sink built from a closure that reports failures
pub struct FallibleSink<F> {
    f: F,
}

/// Wrap a fallible closure as a [`Sink`]
pub fn fallible<F>(f: F) -> FallibleSink<F>
where
    F: Fn(&LogRecord) -> Result<(), SinkError> + Send + Sync,
{
    FallibleSink { f }
}

impl<F> Sink for FallibleSink<F>
where
    F: Fn(&LogRecord) -> Result<(), SinkError> + Send + Sync,
{
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError> {
        (self.f)(record)
    }
}

/// Writes each record as one JSON object per line
pub struct JsonLinesSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consume the sink and return the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonLinesSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> Sink for JsonLinesSink<W> {
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError> {
        let mut writer = self.writer.lock();
        serde_json::to_writer(&mut *writer, record)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Keeps every record in memory
///
/// Clones share the same buffer, so one clone can be handed to a logger
/// while another is used to read what was emitted.
#[derive(Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the records emitted so far
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn emit(&self, record: &LogRecord) -> Result<(), SinkError> {
        self.records.lock().push(record.clone());
        Ok(())
    }
}
