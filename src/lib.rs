//! # Preset Logger
//!
//! Pre-configured loggers with consistent `HH:MM:SS` timestamps and
//! caller-location annotation.
//!
//! ## Profiles
//!
//! - **Standard**: colorized console output, Info and above
//! - **Error file**: Error and above only, also appended to a log file
//!
//! [`parse_level`] turns a level name from configuration (for instance an
//! environment variable) into a [`LogLevel`].
//!
//! ```no_run
//! use preset_logger::prelude::*;
//!
//! let console = create_standard_logger();
//! console.info("starting up");
//!
//! let errors = create_error_file_logger("errors.log")?;
//! errors.error("could not reach upstream");
//!
//! let level = parse_level(&std::env::var("LOG_LEVEL").unwrap_or_default());
//! # let _ = level;
//! # Ok::<(), LoggerError>(())
//! ```

pub mod core;
pub mod hooks;
pub mod macros;
pub mod presets;

pub mod prelude {
    pub use crate::core::{
        parse_level, CallFrame, CallerPrettifier, CallerStyle, FormatterConfig, Hook, LogEntry,
        LogLevel, Logger, LoggerBuilder, LoggerError, Output, Result, TimestampFormat,
    };
    pub use crate::hooks::FileSinkHook;
    pub use crate::presets::{create_error_file_logger, create_standard_logger};
}

pub use crate::core::{
    parse_level, CallFrame, CallerPrettifier, CallerStyle, FormatterConfig, Hook, LogEntry,
    LogLevel, Logger, LoggerBuilder, LoggerError, Output, Result, TimestampFormat,
};
pub use crate::hooks::FileSinkHook;
pub use crate::presets::{
    create_error_file_logger, create_standard_logger, error_file_logger_builder, file_formatter,
    plain_formatter, standard_formatter, standard_logger_builder, TIMESTAMP_LAYOUT,
};
