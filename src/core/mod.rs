//! Core logger types and traits

pub mod caller;
pub mod error;
pub mod formatter;
pub mod hook;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use caller::{CallFrame, CallerPrettifier, CallerStyle};
pub use error::{LoggerError, Result};
pub use formatter::FormatterConfig;
pub use hook::Hook;
pub use log_entry::LogEntry;
pub use log_level::{parse_level, LogLevel};
pub use logger::{Logger, LoggerBuilder, Output};
pub use timestamp::TimestampFormat;
