use crate::format::Formatter;
use crate::record::LogEvent;
use chrono::{DateTime, Local};

/// Level names are padded to this width when `align_levels` is enabled;
/// `"critical"` is the longest name.
const LEVEL_WIDTH: usize = 8;

/// One rendering instruction in a format specification.
///
/// A component carries no event data; it only describes which piece of the
/// event (or which literal) to emit. Components are immutable once built
/// and a `Vec` of them can be shared freely across concurrent renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogComponent {
    /// The render-time clock reading, formatted with the active timestamp
    /// pattern. Captured once per line, so repeated occurrences agree.
    Timestamp,
    /// Canonical lowercase level name, e.g. `"warning"`.
    LevelText,
    /// Level name with the first character upper-cased.
    LevelTextCapitalized,
    /// Neutral glyph per level (🔍 🐛 ℹ️ 🔔 ⚠️ ❗ 🔥).
    LevelEmoji,
    /// Colored circle per level, white through red by severity.
    LevelEmojiColor,
    /// The event message.
    Message,
    /// Pre-rendered metadata string, or nothing when the event has none.
    Metadata,
    /// Raw originating file path, unmodified.
    File,
    /// Last path segment with its extension stripped.
    Filename,
    /// Last path segment with its extension kept.
    FilenameWithExtension,
    /// Originating function name.
    Function,
    /// Originating line number in decimal.
    Line,
    /// A fixed literal, independent of the event.
    Text(String),
    /// Children concatenated in order with no separator between them,
    /// regardless of the enclosing separator. Groups may nest.
    Group(Vec<LogComponent>),
}

impl LogComponent {
    /// Render this component against one event snapshot.
    ///
    /// Total over its input domain: every case yields some string, and the
    /// recursion into `Group` is direct structural recursion bounded by the
    /// caller-authored component tree.
    pub(crate) fn render(&self, event: &LogEvent, now: &DateTime<Local>, fmt: &Formatter) -> String {
        match self {
            LogComponent::Timestamp => now.format(&fmt.timestamp_format).to_string(),
            LogComponent::LevelText => pad_level(event.level.as_str(), fmt),
            LogComponent::LevelTextCapitalized => pad_level(event.level.capitalized(), fmt),
            LogComponent::LevelEmoji => event.level.emoji().to_string(),
            LogComponent::LevelEmojiColor => event.level.color_emoji().to_string(),
            LogComponent::Message => event.message.clone(),
            LogComponent::Metadata => event.metadata.clone().unwrap_or_default(),
            LogComponent::File => event.file.clone(),
            LogComponent::Filename => {
                pad_to(pretty_filename(&event.file, false), fmt.filename_alignment)
            }
            LogComponent::FilenameWithExtension => {
                pad_to(pretty_filename(&event.file, true), fmt.filename_alignment)
            }
            LogComponent::Function => event.function.clone(),
            LogComponent::Line => pad_to(event.line.to_string(), fmt.line_number_alignment),
            LogComponent::Text(s) => s.clone(),
            LogComponent::Group(children) => children
                .iter()
                .map(|child| child.render(event, now, fmt))
                .collect(),
        }
    }
}

fn pad_level(name: &str, fmt: &Formatter) -> String {
    let width = if fmt.align_levels { Some(LEVEL_WIDTH) } else { None };
    pad_to(name.to_string(), width)
}

/// Right-pad `text` with spaces to `width` characters. `None` disables
/// padding; text already at or past the width is returned unchanged,
/// never truncated. Width is counted in characters, not bytes.
pub(crate) fn pad_to(mut text: String, width: Option<usize>) -> String {
    if let Some(width) = width {
        let len = text.chars().count();
        if len < width {
            text.extend(std::iter::repeat(' ').take(width - len));
        }
    }
    text
}

/// Extract the displayed filename from a file path.
///
/// Takes the last `/`-separated segment, falling back to `"Unknown"` when
/// the path is empty or ends in a separator. With `keep_extension` the
/// segment is returned as-is; otherwise it is split on `.`, the last part
/// is dropped and the rest rejoined with no separator. A segment without
/// any `.` (including the `"Unknown"` fallback) therefore collapses to the
/// empty string in the extension-dropped mode; callers rely on that
/// degradation, it is not corrected here.
pub(crate) fn pretty_filename(path: &str, keep_extension: bool) -> String {
    let segment = match path.split('/').next_back() {
        Some(s) if !s.is_empty() => s,
        _ => "Unknown",
    };

    if keep_extension {
        return segment.to_string();
    }

    let parts: Vec<&str> = segment.split('.').collect();
    parts[..parts.len() - 1].concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;

    #[test]
    fn pretty_filename_takes_last_segment() {
        assert_eq!(pretty_filename("/a/b/main.swift", true), "main.swift");
        assert_eq!(pretty_filename("/a/b/main.swift", false), "main");
        assert_eq!(pretty_filename("main.swift", true), "main.swift");
        assert_eq!(pretty_filename("main.swift", false), "main");
    }

    #[test]
    fn pretty_filename_degrades_on_malformed_paths() {
        assert_eq!(pretty_filename("", true), "Unknown");
        // The fallback has no extension, so the dropped-extension mode
        // collapses it to nothing. Documented behavior, kept as-is.
        assert_eq!(pretty_filename("", false), "");
        assert_eq!(pretty_filename("/a/b/", true), "Unknown");
        assert_eq!(pretty_filename("/a/b/Makefile", false), "");
    }

    #[test]
    fn pretty_filename_drops_only_the_final_extension_part() {
        assert_eq!(pretty_filename("/x/archive.tar.gz", false), "archivetar");
    }

    #[test]
    fn pad_reaches_exact_width_and_never_truncates() {
        assert_eq!(pad_to("ab".to_string(), Some(5)), "ab   ");
        assert_eq!(pad_to("ab".to_string(), Some(5)).chars().count(), 5);
        assert_eq!(pad_to("abcdef".to_string(), Some(3)), "abcdef");
        assert_eq!(pad_to("ab".to_string(), None), "ab");
        assert_eq!(pad_to(String::new(), Some(0)), "");
    }

    #[test]
    fn pad_counts_characters_not_bytes() {
        assert_eq!(pad_to("🔵".to_string(), Some(3)), "🔵  ");
    }

    #[test]
    fn group_concatenates_children_without_separator() {
        let fmt = Formatter::new(vec![]).with_separator(" | ");
        let event = LogEvent::new(Level::Info, "msg");
        let now = Local::now();

        let group = LogComponent::Group(vec![
            LogComponent::LevelText,
            LogComponent::Text(":".into()),
            LogComponent::Message,
        ]);
        let children_joined: String = [
            LogComponent::LevelText,
            LogComponent::Text(":".into()),
            LogComponent::Message,
        ]
        .iter()
        .map(|c| c.render(&event, &now, &fmt))
        .collect();

        assert_eq!(group.render(&event, &now, &fmt), children_joined);
        assert_eq!(group.render(&event, &now, &fmt), "info:msg");
    }

    #[test]
    fn nested_groups_render_recursively() {
        let fmt = Formatter::new(vec![]);
        let mut event = LogEvent::new(Level::Error, "boom");
        event.file = "src/main.rs".into();
        event.line = 7;
        let now = Local::now();

        let group = LogComponent::Group(vec![
            LogComponent::Group(vec![
                LogComponent::FilenameWithExtension,
                LogComponent::Text(":".into()),
            ]),
            LogComponent::Line,
        ]);
        let fmt = Formatter {
            filename_alignment: None,
            line_number_alignment: None,
            ..fmt
        };
        assert_eq!(group.render(&event, &now, &fmt), "main.rs:7");
    }

    #[test]
    fn metadata_absent_renders_empty_not_placeholder() {
        let fmt = Formatter::new(vec![]);
        let event = LogEvent::new(Level::Debug, "m");
        let now = Local::now();
        assert_eq!(LogComponent::Metadata.render(&event, &now, &fmt), "");
    }

    #[test]
    fn level_text_pads_to_eight_when_aligned() {
        let fmt = Formatter::new(vec![]).with_aligned_levels(true);
        let now = Local::now();

        let warn = LogEvent::new(Level::Warning, "");
        assert_eq!(LogComponent::LevelText.render(&warn, &now, &fmt), "warning ");
        assert_eq!(
            LogComponent::LevelTextCapitalized.render(&warn, &now, &fmt),
            "Warning "
        );

        // "critical" already fills the width.
        let crit = LogEvent::new(Level::Critical, "");
        assert_eq!(LogComponent::LevelText.render(&crit, &now, &fmt), "critical");

        let plain = Formatter::new(vec![]);
        assert_eq!(LogComponent::LevelText.render(&warn, &now, &plain), "warning");
    }
}
