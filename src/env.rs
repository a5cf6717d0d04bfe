use crate::format::Formatter;

/// Environment variable names used by this crate for convenient
/// formatter selection at process start.
///
/// These are purely helpers; the core formatter types remain decoupled
/// from environment access.

/// Preset name: `plain`, `colorful` or `detailed`.
pub const LOG_FORMAT_PRESET_ENV: &str = "LOG_FORMAT_PRESET";

/// Read an environment variable or fall back to a provided default.
pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Build a preset [`Formatter`] from [`LOG_FORMAT_PRESET_ENV`].
///
/// Unknown or unset values fall back to [`Formatter::plain`].
pub fn formatter_from_env() -> Formatter {
    match env_or(LOG_FORMAT_PRESET_ENV, "plain").as_str() {
        "colorful" => Formatter::colorful(),
        "detailed" => Formatter::detailed(),
        _ => Formatter::plain(),
    }
}
