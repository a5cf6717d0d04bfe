use crate::format::Formatter;
use crate::level::Level;
use crate::record::LogEvent;
use crate::sink::LineSink;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;

/// One independent rendering of the event stream: a [`Formatter`] paired
/// with the [`LineSink`] that receives its lines.
#[derive(Clone)]
pub struct Handler {
    formatter: Formatter,
    sink: Arc<dyn LineSink>,
}

impl Handler {
    pub fn new(formatter: Formatter, sink: Arc<dyn LineSink>) -> Self {
        Handler { formatter, sink }
    }
}

/// `tracing_subscriber` layer that turns each observed event into a
/// [`LogEvent`] snapshot and renders it through every attached
/// [`Handler`].
///
/// Rendering and delivery are synchronous on the emitting thread; the
/// layer buffers nothing and never blocks on anything but the sink's own
/// write. Handlers see the same snapshot, so two formatters attached to
/// the same layer always describe the same event.
pub struct FormatLayer {
    handlers: Vec<Handler>,
}

impl FormatLayer {
    pub fn new(handlers: Vec<Handler>) -> Self {
        FormatLayer { handlers }
    }

    /// Convenience for the common one-formatter, one-sink setup.
    pub fn single(formatter: Formatter, sink: Arc<dyn LineSink>) -> Self {
        FormatLayer::new(vec![Handler::new(formatter, sink)])
    }
}

impl<S> Layer<S> for FormatLayer
where
    S: Subscriber + for<'span> LookupSpan<'span>,
{
    fn on_event(&self, event: &Event, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        let mut message: Option<String> = None;

        let mut visitor = FieldVisitor {
            fields: &mut fields,
            message: &mut message,
        };
        event.record(&mut visitor);

        let meta = event.metadata();
        let snapshot = LogEvent {
            level: Level::from_tracing(meta.level()),
            message: message.unwrap_or_default(),
            metadata: pretty_metadata(&fields),
            file: meta.file().unwrap_or("").to_string(),
            function: meta.module_path().unwrap_or("").to_string(),
            line: meta.line().unwrap_or(0),
        };

        for handler in &self.handlers {
            handler.sink.accept(&handler.formatter.format(&snapshot));
        }
    }
}

/// Pre-render structured fields as space-joined `key=value` pairs in
/// field-name order. String values are emitted without quotes; everything
/// else uses its JSON rendering. No fields yields `None`, which the
/// `Metadata` component elides from the line.
fn pretty_metadata(fields: &BTreeMap<String, serde_json::Value>) -> Option<String> {
    if fields.is_empty() {
        return None;
    }

    let pairs: Vec<String> = fields
        .iter()
        .map(|(key, value)| match value {
            serde_json::Value::String(s) => format!("{key}={s}"),
            other => format!("{key}={other}"),
        })
        .collect();
    Some(pairs.join(" "))
}

use tracing::field::{Field, Visit};

struct FieldVisitor<'a> {
    fields: &'a mut BTreeMap<String, serde_json::Value>,
    message: &'a mut Option<String>,
}

impl<'a> Visit for FieldVisitor<'a> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            *self.message = Some(value.to_string());
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(value.to_string()),
            );
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.fields
            .insert(field.name().to_string(), serde_json::Value::from(value));
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.message = Some(format!("{:?}", value));
        } else {
            self.fields.insert(
                field.name().to_string(),
                serde_json::Value::String(format!("{:?}", value)),
            );
        }
    }
}
