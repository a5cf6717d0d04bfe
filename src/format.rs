use crate::component::LogComponent;
use crate::record::LogEvent;
use chrono::{DateTime, Local};

/// Default column the filename components are padded to.
pub const DEFAULT_FILENAME_ALIGNMENT: usize = 35;

/// Default column the line-number component is padded to.
pub const DEFAULT_LINE_NUMBER_ALIGNMENT: usize = 3;

/// Default timestamp pattern: ISO-8601 date-time with a numeric UTC
/// offset, e.g. `2021-01-22T01:48:30+1100`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// An ordered sequence of [`LogComponent`]s plus the formatting options
/// that govern how they render.
///
/// A `Formatter` is built once (typically at process start) and reused for
/// every event. It holds no per-event state, so one instance can serve
/// concurrent renders from any number of handlers without synchronization.
#[derive(Debug, Clone)]
pub struct Formatter {
    /// Top-level components, rendered in declared order.
    pub components: Vec<LogComponent>,
    /// Inserted between non-empty top-level results only, never inside a
    /// `Group`. Empty string suppresses joining entirely.
    pub separator: String,
    /// Pad level names to a fixed 8 characters.
    pub align_levels: bool,
    /// Target width for `Filename` / `FilenameWithExtension`; `None`
    /// disables padding.
    pub filename_alignment: Option<usize>,
    /// Target width for `Line`; `None` disables padding.
    pub line_number_alignment: Option<usize>,
    /// chrono pattern applied to the per-line clock capture.
    pub timestamp_format: String,
}

impl Formatter {
    /// Build a formatter over `components` with the default options:
    /// single-space separator, no level alignment, filename width 35,
    /// line-number width 3, ISO-8601 timestamps.
    pub fn new(components: Vec<LogComponent>) -> Self {
        Formatter {
            components,
            separator: " ".to_string(),
            align_levels: false,
            filename_alignment: Some(DEFAULT_FILENAME_ALIGNMENT),
            line_number_alignment: Some(DEFAULT_LINE_NUMBER_ALIGNMENT),
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_aligned_levels(mut self, align: bool) -> Self {
        self.align_levels = align;
        self
    }

    pub fn with_filename_alignment(mut self, width: Option<usize>) -> Self {
        self.filename_alignment = width;
        self
    }

    pub fn with_line_number_alignment(mut self, width: Option<usize>) -> Self {
        self.line_number_alignment = width;
        self
    }

    pub fn with_timestamp_format(mut self, pattern: impl Into<String>) -> Self {
        self.timestamp_format = pattern.into();
        self
    }

    /// Minimal `level: message` rendering with nothing aligned.
    pub fn plain() -> Self {
        Formatter::new(vec![LogComponent::LevelText, LogComponent::Message])
            .with_separator(": ")
            .with_filename_alignment(None)
            .with_line_number_alignment(None)
    }

    /// Pipe-delimited rendering with a colored-circle level glyph and a
    /// `filename:line` group.
    pub fn colorful() -> Self {
        Formatter::new(vec![
            LogComponent::Timestamp,
            LogComponent::Group(vec![
                LogComponent::LevelEmojiColor,
                LogComponent::Text(" ".into()),
                LogComponent::LevelTextCapitalized,
            ]),
            LogComponent::Group(vec![
                LogComponent::FilenameWithExtension,
                LogComponent::Text(":".into()),
                LogComponent::Line,
            ]),
            LogComponent::Message,
        ])
        .with_separator(" | ")
        .with_aligned_levels(true)
    }

    /// Triangle-delimited rendering carrying the full call site, message
    /// and metadata.
    pub fn detailed() -> Self {
        Formatter::new(vec![
            LogComponent::Timestamp,
            LogComponent::Group(vec![
                LogComponent::LevelEmoji,
                LogComponent::Text(" ".into()),
                LogComponent::LevelTextCapitalized,
            ]),
            LogComponent::File,
            LogComponent::Line,
            LogComponent::Function,
            LogComponent::Message,
            LogComponent::Metadata,
        ])
        .with_separator(" ▶ ")
        .with_aligned_levels(true)
    }

    /// Render one event into a finished line, capturing the clock once.
    ///
    /// Cannot fail: every component yields some string for every input,
    /// and empty results are elided before joining so optional fields
    /// never leave a dangling separator.
    pub fn format(&self, event: &LogEvent) -> String {
        self.format_at(event, Local::now())
    }

    /// Render with an explicit clock reading instead of `Local::now()`.
    ///
    /// Every `Timestamp` component in the tree sees this same reading,
    /// which also makes output bit-for-bit reproducible in tests.
    pub fn format_at(&self, event: &LogEvent, now: DateTime<Local>) -> String {
        let rendered: Vec<String> = self
            .components
            .iter()
            .map(|component| component.render(event, &now, self))
            .filter(|text| !text.is_empty())
            .collect();
        rendered.join(&self.separator)
    }
}
