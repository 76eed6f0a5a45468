//! Hook trait for severity-gated log outputs

use super::{error::Result, log_entry::LogEntry, log_level::LogLevel};

/// A routing rule fired by the logger for every record it accepts, before the
/// record reaches the logger's primary output.
pub trait Hook: Send + Sync {
    fn accepts(&self, level: LogLevel) -> bool;
    fn fire(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
