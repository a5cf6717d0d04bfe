use serde::Serialize;
use std::fmt;

/// Severity of a [`LogEvent`](crate::record::LogEvent), ordered from least
/// to most severe.
///
/// The set is wider than the five levels `tracing` emits; `Notice` and
/// `Critical` are reachable through the direct formatting API and through
/// events constructed by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Trace,
    Debug,
    Info,
    Notice,
    Warning,
    Error,
    Critical,
}

/// All levels in ascending severity order.
pub const ALL_LEVELS: [Level; 7] = [
    Level::Trace,
    Level::Debug,
    Level::Info,
    Level::Notice,
    Level::Warning,
    Level::Error,
    Level::Critical,
];

impl Level {
    /// Canonical lowercase name, e.g. `"warning"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Notice => "notice",
            Level::Warning => "warning",
            Level::Error => "error",
            Level::Critical => "critical",
        }
    }

    /// Name with the first character upper-cased, e.g. `"Warning"`.
    pub fn capitalized(self) -> &'static str {
        match self {
            Level::Trace => "Trace",
            Level::Debug => "Debug",
            Level::Info => "Info",
            Level::Notice => "Notice",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Critical => "Critical",
        }
    }

    /// Neutral/informational glyph for the level.
    pub fn emoji(self) -> &'static str {
        match self {
            Level::Trace => "🔍",
            Level::Debug => "🐛",
            Level::Info => "ℹ️",
            Level::Notice => "🔔",
            Level::Warning => "⚠️",
            Level::Error => "❗",
            Level::Critical => "🔥",
        }
    }

    /// Colored-circle glyph for the level, ordered by increasing severity
    /// (white through red).
    pub fn color_emoji(self) -> &'static str {
        match self {
            Level::Trace => "⚪️",
            Level::Debug => "🟤",
            Level::Info => "🔵",
            Level::Notice => "🟢",
            Level::Warning => "🟡",
            Level::Error => "🟠",
            Level::Critical => "🔴",
        }
    }

    /// Map a `tracing` level onto this set. `Notice` and `Critical` have no
    /// `tracing` counterpart and are never produced here.
    pub fn from_tracing(level: &tracing::Level) -> Level {
        if *level == tracing::Level::TRACE {
            Level::Trace
        } else if *level == tracing::Level::DEBUG {
            Level::Debug
        } else if *level == tracing::Level::INFO {
            Level::Info
        } else if *level == tracing::Level::WARN {
            Level::Warning
        } else {
            Level::Error
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
