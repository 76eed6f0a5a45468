//! Pre-configured logger profiles
//!
//! Two profiles are provided:
//!
//! - [`create_standard_logger`]: colorized console output with compact
//!   ` | function | | file:line` caller decoration, for interactive use.
//! - [`create_error_file_logger`]: plain output restricted to Error and
//!   above, with every error also appended to a log file.
//!
//! Both stamp records with `HH:MM:SS` wall-clock times and print full level
//! names.

use crate::core::caller::{caller_prettifier, CallerStyle};
use crate::core::{FormatterConfig, LogLevel, Logger, LoggerBuilder, LoggerError, Result};
use crate::hooks::FileSinkHook;
use std::fs::OpenOptions;
use std::path::Path;

/// strftime layout shared by every preset
pub const TIMESTAMP_LAYOUT: &str = "%H:%M:%S";

fn base_formatter(style: CallerStyle) -> FormatterConfig {
    FormatterConfig::new()
        .with_custom_timestamp(TIMESTAMP_LAYOUT)
        .with_full_timestamp(true)
        .with_disable_level_truncation(true)
        .with_caller_prettifier(caller_prettifier(style))
}

/// Console formatter: colors forced on, decorated caller labels
pub fn standard_formatter() -> FormatterConfig {
    base_formatter(CallerStyle::Colorized).with_force_colors(true)
}

/// Formatter for consoles that should stay plain: bare caller labels and no
/// forced colors
pub fn plain_formatter() -> FormatterConfig {
    base_formatter(CallerStyle::Plain)
}

/// File formatter: bare caller labels, never any color codes
pub fn file_formatter() -> FormatterConfig {
    base_formatter(CallerStyle::Plain).with_disable_colors(true)
}

/// Console logger with caller reporting and forced colors.
///
/// The minimum level is left at the default, Info.
///
/// # Examples
///
/// ```
/// use preset_logger::create_standard_logger;
///
/// let logger = create_standard_logger();
/// logger.info("service started");
/// ```
pub fn create_standard_logger() -> Logger {
    standard_logger_builder().build()
}

/// Builder preloaded with the standard profile, for callers that need to
/// redirect its output before building
pub fn standard_logger_builder() -> LoggerBuilder {
    Logger::builder()
        .report_caller(true)
        .formatter(standard_formatter())
}

/// Logger that only emits Error and Fatal records and appends them to
/// `log_file_path`.
///
/// The file is opened once up front to check that it can be created or
/// appended to. The parent directory is not created.
///
/// # Errors
///
/// Returns [`LoggerError::FileOpen`] with the path and the OS error when
/// the file cannot be opened.
///
/// # Examples
///
/// ```no_run
/// use preset_logger::create_error_file_logger;
///
/// let logger = create_error_file_logger("/var/log/app-errors.log")?;
/// logger.error("payment gateway unreachable");
/// # Ok::<(), preset_logger::LoggerError>(())
/// ```
pub fn create_error_file_logger(log_file_path: impl AsRef<Path>) -> Result<Logger> {
    Ok(error_file_logger_builder(log_file_path)?.build())
}

/// Builder preloaded with the error-file profile, file hook included.
///
/// # Errors
///
/// Same as [`create_error_file_logger`].
pub fn error_file_logger_builder(log_file_path: impl AsRef<Path>) -> Result<LoggerBuilder> {
    let path = log_file_path.as_ref();
    check_writable(path)?;

    let hook = FileSinkHook::new(path, LogLevel::Error, file_formatter())?;

    Ok(Logger::builder()
        .report_caller(true)
        .formatter(plain_formatter())
        .min_level(LogLevel::Error)
        .hook(hook))
}

fn check_writable(path: &Path) -> Result<()> {
    let mut options = OpenOptions::new();
    options.read(true).write(true).append(true).create(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    options
        .open(path)
        .map(drop)
        .map_err(|e| LoggerError::file_open(path.display().to_string(), e))
}
