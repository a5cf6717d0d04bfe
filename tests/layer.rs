use line_format::format::Formatter;
use line_format::layer::{FormatLayer, Handler};
use line_format::sink::LineSink;
use std::sync::{Arc, Mutex};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

#[derive(Default)]
struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

impl LineSink for CaptureSink {
    fn accept(&self, line: &str) {
        self.lines.lock().unwrap().push(line.to_string());
    }
}

#[test]
fn layer_renders_events_into_the_sink() {
    let sink = Arc::new(CaptureSink::default());
    let layer = FormatLayer::single(Formatter::plain(), sink.clone());
    let subscriber = Registry::default().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("hello");
        tracing::warn!("careful");
    });

    assert_eq!(sink.lines(), vec!["info: hello", "warning: careful"]);
}

#[test]
fn structured_fields_become_metadata() {
    let sink = Arc::new(CaptureSink::default());
    let layer = FormatLayer::single(Formatter::detailed(), sink.clone());
    let subscriber = Registry::default().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        tracing::error!(user = "ana", attempt = 3, "login failed");
    });

    let lines = sink.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("login failed"));
    assert!(lines[0].contains("attempt=3 user=ana"));
    assert!(lines[0].contains(" ▶ "));
    // Call-site file comes through and keeps its extension.
    assert!(lines[0].contains("layer.rs"));
}

#[test]
fn every_handler_sees_the_same_event() {
    let first = Arc::new(CaptureSink::default());
    let second = Arc::new(CaptureSink::default());
    let layer = FormatLayer::new(vec![
        Handler::new(Formatter::plain(), first.clone()),
        Handler::new(
            Formatter::plain().with_separator(" - "),
            second.clone(),
        ),
    ]);
    let subscriber = Registry::default().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        tracing::info!("same event");
    });

    assert_eq!(first.lines(), vec!["info: same event"]);
    assert_eq!(second.lines(), vec!["info - same event"]);
}
