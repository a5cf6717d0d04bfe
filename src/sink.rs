use std::io::Write;

/// Destination for finished log lines produced by a
/// [`Formatter`](crate::format::Formatter).
///
/// Implementations are responsible for transporting one rendered line to a
/// concrete destination (stdout, stderr, a file, a test buffer). The layer
/// calls `accept` synchronously on the thread that emitted the event; any
/// serialization across concurrent writers is the sink's concern, not the
/// renderer's.
pub trait LineSink: Send + Sync {
    /// Accept a single fully rendered line, without a trailing newline.
    ///
    /// **Parameters**
    /// - `line`: the finished output of one render call.
    ///
    /// `accept` has no failure path; sinks that hit an I/O error are
    /// expected to drop the line rather than disturb the caller.
    fn accept(&self, line: &str);
}

/// Sink writing each line to standard output, newline-terminated.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl LineSink for StdoutSink {
    fn accept(&self, line: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{line}");
    }
}

/// Sink writing each line to standard error, newline-terminated.
#[derive(Clone, Copy, Debug, Default)]
pub struct StderrSink;

impl LineSink for StderrSink {
    fn accept(&self, line: &str) {
        let mut out = std::io::stderr().lock();
        let _ = writeln!(out, "{line}");
    }
}
