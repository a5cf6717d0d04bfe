use crate::format::Formatter;
use crate::layer::{FormatLayer, Handler};
use crate::sink::{LineSink, StdoutSink};
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

/// Error installing the global `tracing` subscriber.
#[derive(thiserror::Error, Debug)]
pub enum InitError {
    #[error("failed to set global subscriber: {0}")]
    SetGlobalDefault(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Install a global subscriber rendering every `tracing` event through the
/// given handlers.
///
/// **Parameters**
/// - `handlers`: independent (formatter, sink) pairs; each renders every
///   event with its own [`Formatter`] and hands the line to its own sink.
///
/// **Returns**
/// - `Ok(())` once the subscriber is installed.
/// - `Err(..)` if a global subscriber was already set.
pub fn try_init(handlers: Vec<Handler>) -> Result<(), InitError> {
    let subscriber = Registry::default().with(FormatLayer::new(handlers));
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Like [`try_init`], panicking when a global subscriber already exists.
pub fn init(handlers: Vec<Handler>) {
    try_init(handlers).expect("set global subscriber");
}

/// Install a single formatter writing to standard output. This is the
/// recommended entrypoint for typical binaries.
pub fn init_stdout(formatter: Formatter) {
    let sink: Arc<dyn LineSink> = Arc::new(StdoutSink);
    init(vec![Handler::new(formatter, sink)]);
}
