use crate::sink::LineSink;

/// A sink that simply drops every line.
///
/// Useful for measuring the overhead of rendering itself without any
/// output I/O, and for unit tests that don't care about delivery.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl LineSink for NoopSink {
    fn accept(&self, _line: &str) {}
}
