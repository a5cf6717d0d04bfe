use crate::level::Level;
use serde::Serialize;

/// Immutable snapshot of one log event, consumed read-only by the
/// rendering path.
///
/// `metadata` is the pre-rendered structured-field string (see
/// [`crate::layer`]); `None` means the event carried no fields and the
/// `Metadata` component renders as the empty string.
#[derive(Debug, Clone, Serialize)]
pub struct LogEvent {
    pub level: Level,
    pub message: String,
    pub metadata: Option<String>,
    pub file: String,
    pub function: String,
    pub line: u32,
}

impl LogEvent {
    /// Build an event with only a level and a message; call-site fields
    /// default to empty / zero.
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        LogEvent {
            level,
            message: message.into(),
            metadata: None,
            file: String::new(),
            function: String::new(),
            line: 0,
        }
    }
}
