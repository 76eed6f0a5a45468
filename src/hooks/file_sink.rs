//! File sink hook implementation

use crate::core::{FormatterConfig, Hook, LogEntry, LogLevel, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{LineWriter, Write};
use std::path::{Path, PathBuf};

/// Appends records at or above `min_level` to a file, one line per record.
pub struct FileSinkHook {
    path: PathBuf,
    min_level: LogLevel,
    formatter: FormatterConfig,
    writer: LineWriter<File>,
}

impl FileSinkHook {
    /// Open `path` for appending, creating it if needed.
    ///
    /// The parent directory must already exist.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use preset_logger::hooks::FileSinkHook;
    /// use preset_logger::{FormatterConfig, LogLevel};
    ///
    /// let hook = FileSinkHook::new("/var/log/app-errors.log", LogLevel::Error, FormatterConfig::new())
    ///     .unwrap();
    /// ```
    pub fn new(
        path: impl Into<PathBuf>,
        min_level: LogLevel,
        formatter: FormatterConfig,
    ) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_open(path.display().to_string(), e))?;

        Ok(Self {
            path,
            min_level,
            formatter,
            writer: LineWriter::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn formatter(&self) -> &FormatterConfig {
        &self.formatter
    }
}

impl Hook for FileSinkHook {
    fn accepts(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn fire(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = self.formatter.format(entry);
        output.push('\n');

        self.writer.write_all(output.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file_sink"
    }
}

impl Drop for FileSinkHook {
    fn drop(&mut self) {
        let _ = self.writer.flush();
    }
}
