//! Timestamp formatting utilities
//!
//! Provides the timestamp formats available to formatters. Records are
//! stamped with the local clock, since the presets print wall-clock
//! `HH:MM:SS` times for people reading a console or a log file.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use preset_logger::core::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
/// let timestamp = format.format(&Local::now());
/// assert_eq!(timestamp.len(), 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+01:00`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45+01:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use preset_logger::core::TimestampFormat;
    ///
    /// // Clock time only
    /// let format = TimestampFormat::Custom("%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }
}
