//! Text formatter configuration
//!
//! A [`FormatterConfig`] renders one [`LogEntry`] as one line of text:
//! timestamp, level, message and, when the entry carries a call frame, the
//! caller annotation produced by the configured prettifier.

use super::caller::{CallFrame, CallerPrettifier};
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::TimestampFormat;
use chrono::{DateTime, Local};
use colored::{Color, Colorize};
use std::fmt;

const CALLER_COLOR: Color = Color::Cyan;

/// Configuration for log formatting
///
/// # Examples
///
/// ```
/// use preset_logger::core::{CallerStyle, FormatterConfig};
/// use preset_logger::core::caller::caller_prettifier;
///
/// let config = FormatterConfig::new()
///     .with_custom_timestamp("%H:%M:%S")
///     .with_full_timestamp(true)
///     .with_disable_colors(true)
///     .with_caller_prettifier(caller_prettifier(CallerStyle::Plain));
/// ```
#[derive(Clone)]
pub struct FormatterConfig {
    /// Timestamp format used when `full_timestamp` is set
    pub timestamp_format: TimestampFormat,
    /// Print the formatted timestamp instead of seconds since startup
    pub full_timestamp: bool,
    /// Emit ANSI colors even when the output is not a terminal
    pub force_colors: bool,
    /// Never emit ANSI colors; wins over `force_colors`
    pub disable_colors: bool,
    /// Print full level names (WARNING) instead of four characters (WARN)
    pub disable_level_truncation: bool,
    /// Produces the caller labels; `None` prints the raw frame
    pub caller_prettifier: Option<CallerPrettifier>,
    created_at: DateTime<Local>,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            full_timestamp: false,
            force_colors: false,
            disable_colors: false,
            disable_level_truncation: false,
            caller_prettifier: None,
            created_at: Local::now(),
        }
    }
}

impl fmt::Debug for FormatterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterConfig")
            .field("timestamp_format", &self.timestamp_format)
            .field("full_timestamp", &self.full_timestamp)
            .field("force_colors", &self.force_colors)
            .field("disable_colors", &self.disable_colors)
            .field("disable_level_truncation", &self.disable_level_truncation)
            .field("caller_prettifier", &self.caller_prettifier.is_some())
            .finish()
    }
}

impl FormatterConfig {
    /// Create a new formatter configuration with default values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Use a strftime-compatible timestamp layout
    #[must_use]
    pub fn with_custom_timestamp(mut self, format_str: &str) -> Self {
        self.timestamp_format = TimestampFormat::Custom(format_str.to_string());
        self
    }

    #[must_use]
    pub fn with_full_timestamp(mut self, full: bool) -> Self {
        self.full_timestamp = full;
        self
    }

    #[must_use]
    pub fn with_force_colors(mut self, force: bool) -> Self {
        self.force_colors = force;
        self
    }

    #[must_use]
    pub fn with_disable_colors(mut self, disable: bool) -> Self {
        self.disable_colors = disable;
        self
    }

    #[must_use]
    pub fn with_disable_level_truncation(mut self, disable: bool) -> Self {
        self.disable_level_truncation = disable;
        self
    }

    #[must_use]
    pub fn with_caller_prettifier(mut self, prettifier: CallerPrettifier) -> Self {
        self.caller_prettifier = Some(prettifier);
        self
    }

    /// Render `entry` as a single line without the trailing newline.
    pub fn format(&self, entry: &LogEntry) -> String {
        let mut line = self.format_timestamp(entry);
        line.push(' ');
        line.push_str(&self.paint(self.level_name(entry.level), entry.level.color_code()));
        line.push(' ');
        line.push_str(&entry.message);

        if let Some(ref frame) = entry.caller {
            let (function, location) = self.caller_labels(frame);
            for label in [function, location] {
                if label.is_empty() {
                    continue;
                }
                // Decorated labels bring their own leading separator
                if !label.starts_with(char::is_whitespace) {
                    line.push(' ');
                }
                line.push_str(&self.paint(&label, CALLER_COLOR));
            }
        }

        line
    }

    fn format_timestamp(&self, entry: &LogEntry) -> String {
        if self.full_timestamp {
            self.timestamp_format.format(&entry.timestamp)
        } else {
            let elapsed = (entry.timestamp - self.created_at).num_seconds().max(0);
            format!("[{:04}]", elapsed)
        }
    }

    fn level_name(&self, level: LogLevel) -> &'static str {
        if self.disable_level_truncation {
            level.to_str()
        } else {
            level.truncated()
        }
    }

    fn caller_labels(&self, frame: &CallFrame) -> (String, String) {
        match self.caller_prettifier {
            Some(ref prettifier) => prettifier(frame),
            None => (frame.function.clone(), format!("{}:{}", frame.file, frame.line)),
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.disable_colors {
            text.to_string()
        } else if self.force_colors {
            // Raw escape codes: `colored` would consult the global tty override
            format!("\x1b[{}m{}\x1b[0m", color.to_fg_str(), text)
        } else {
            text.color(color).to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::caller::{caller_prettifier, CallerStyle};
    use chrono::TimeZone;

    fn entry(level: LogLevel, message: &str) -> LogEntry {
        let timestamp = Local
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .earliest()
            .expect("valid datetime");
        LogEntry::new(level, message.to_string())
            .with_timestamp(timestamp)
            .with_caller(CallFrame::new("app/server::run", "/src/app/server.rs", 12))
    }

    fn plain() -> FormatterConfig {
        FormatterConfig::new()
            .with_custom_timestamp("%H:%M:%S")
            .with_full_timestamp(true)
            .with_disable_colors(true)
            .with_disable_level_truncation(true)
    }

    #[test]
    fn test_plain_line_with_prettifier() {
        let config = plain().with_caller_prettifier(caller_prettifier(CallerStyle::Plain));
        assert_eq!(
            config.format(&entry(LogLevel::Error, "boom")),
            "10:30:45 ERROR boom server::run server.rs:12"
        );
    }

    #[test]
    fn test_colorized_labels_keep_their_separators() {
        let config = plain().with_caller_prettifier(caller_prettifier(CallerStyle::Colorized));
        assert_eq!(
            config.format(&entry(LogLevel::Info, "ready")),
            "10:30:45 INFO ready | server::run | | server.rs:12"
        );
    }

    #[test]
    fn test_colorized_empty_function_has_no_stray_separators() {
        let config = plain().with_caller_prettifier(caller_prettifier(CallerStyle::Colorized));
        let mut record = entry(LogLevel::Info, "ready");
        record.caller = Some(CallFrame::new("", "src/app/server.rs", 12));
        assert_eq!(config.format(&record), "10:30:45 INFO ready | server.rs:12");
    }

    #[test]
    fn test_raw_frame_without_prettifier() {
        assert_eq!(
            plain().format(&entry(LogLevel::Info, "hi")),
            "10:30:45 INFO hi app/server::run /src/app/server.rs:12"
        );
    }

    #[test]
    fn test_empty_function_label_is_skipped() {
        let config = plain().with_caller_prettifier(caller_prettifier(CallerStyle::Plain));
        let mut record = entry(LogLevel::Warn, "slow");
        record.caller = Some(CallFrame::new("", "src/db.rs", 3));
        assert_eq!(config.format(&record), "10:30:45 WARNING slow db.rs:3");
    }

    #[test]
    fn test_level_truncation() {
        let config = plain().with_disable_level_truncation(false);
        let line = config.format(&entry(LogLevel::Warn, "slow"));
        assert!(line.starts_with("10:30:45 WARN slow"));
        assert!(!line.contains("WARNING"));
    }

    #[test]
    fn test_forced_colors_emit_escape_codes() {
        let config = plain()
            .with_disable_colors(false)
            .with_force_colors(true)
            .with_caller_prettifier(caller_prettifier(CallerStyle::Colorized));
        let line = config.format(&entry(LogLevel::Error, "boom"));
        assert!(line.contains("\x1b[31mERROR\x1b[0m"));
        assert!(line.contains("\x1b[36m | server::run |\x1b[0m"));
    }

    #[test]
    fn test_disable_colors_wins_over_force() {
        let config = plain().with_force_colors(true);
        let line = config.format(&entry(LogLevel::Error, "boom"));
        assert!(!line.contains('\x1b'));
    }

    #[test]
    fn test_short_timestamp_counts_seconds() {
        let config = plain().with_full_timestamp(false);
        let record = LogEntry::new(LogLevel::Info, "tick".to_string());
        assert!(config.format(&record).starts_with("[0000] INFO tick"));
    }

    #[test]
    fn test_debug_hides_prettifier() {
        let config = plain().with_caller_prettifier(caller_prettifier(CallerStyle::Plain));
        let debug = format!("{:?}", config);
        assert!(debug.contains("caller_prettifier: true"));
    }
}
