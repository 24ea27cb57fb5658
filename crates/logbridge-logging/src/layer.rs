//! Tracing layer that forwards events into a logger

use crate::logger::{Logger, emitting_on_current_thread};
use logbridge_core::Severity;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::Layer;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

/// Tracing layer that turns `tracing` events into records of one logger
///
/// Structured fields are appended to the message as `key=value` pairs.
pub struct RecordLayer {
    logger: Logger,
}

impl RecordLayer {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Convert a tracing Level to a severity
    ///
    /// There is no severity below debug, so `TRACE` folds into it.
    fn convert_level(level: &Level) -> Severity {
        match *level {
            Level::TRACE | Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            Level::ERROR => Severity::Error,
        }
    }
}

impl<S> Layer<S> for RecordLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let severity = Self::convert_level(event.metadata().level());

        if emitting_on_current_thread() || !self.logger.is_enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let _ = self.logger.log(severity, visitor.finish());
    }

    fn enabled(&self, metadata: &tracing::Metadata<'_>, _ctx: Context<'_, S>) -> bool {
        self.logger
            .is_enabled(Self::convert_level(metadata.level()))
    }
}

/// Visitor that collects the message and any structured fields
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    fields: Vec<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        let message = self.message.unwrap_or_default();
        if self.fields.is_empty() {
            return message;
        }
        let fields = self.fields.join(" ");
        if message.is_empty() {
            fields
        } else {
            format!("{} {}", message, fields)
        }
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{:?}", value));
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }
}

/// Route `tracing` events of the whole process into `logger`
///
/// Installs a global subscriber with a [`RecordLayer`]. If a global
/// subscriber is already set this does nothing.
pub fn init_logging(logger: Logger) {
    use tracing_subscriber::prelude::*;

    let subscriber = tracing_subscriber::registry().with(RecordLayer::new(logger));

    let _ = tracing::subscriber::set_global_default(subscriber);
}
