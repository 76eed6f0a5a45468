//! Logging macros for ergonomic log message formatting.
//!
//! These macros format their arguments like `format!` and attach a full
//! [`CallFrame`](crate::CallFrame) for the call site, including the enclosing
//! function, which the plain logger methods cannot see.
//!
//! # Examples
//!
//! ```
//! use preset_logger::prelude::*;
//! use preset_logger::info;
//!
//! let logger = create_standard_logger();
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Capture the [`CallFrame`](crate::CallFrame) of the expansion site.
///
/// # Examples
///
/// ```
/// use preset_logger::caller_frame;
///
/// fn handler() -> preset_logger::CallFrame {
///     caller_frame!()
/// }
///
/// let frame = handler();
/// assert!(frame.function.ends_with("handler"));
/// assert!(frame.line > 0);
/// ```
#[macro_export]
macro_rules! caller_frame {
    () => {{
        fn __marker() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        $crate::CallFrame::new(
            $crate::core::caller::enclosing_function(__type_name_of(__marker)),
            file!(),
            line!(),
        )
    }};
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use preset_logger::prelude::*;
/// # let logger = create_standard_logger();
/// use preset_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, $crate::caller_frame!(), format!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use preset_logger::prelude::*;
/// # let logger = create_standard_logger();
/// use preset_logger::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use preset_logger::prelude::*;
/// # let logger = create_standard_logger();
/// use preset_logger::error;
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message. The process is not terminated.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::caller::{caller_prettifier, CallerStyle};
    use crate::core::{FormatterConfig, LogLevel, Logger, Output};
    use parking_lot::Mutex;
    use std::io::Write;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn capture(min_level: LogLevel) -> (Logger, SharedBuffer) {
        let buffer = SharedBuffer::default();
        let logger = Logger::builder()
            .min_level(min_level)
            .report_caller(true)
            .formatter(
                FormatterConfig::new()
                    .with_disable_colors(true)
                    .with_disable_level_truncation(true)
                    .with_caller_prettifier(caller_prettifier(CallerStyle::Plain)),
            )
            .output(Output::Writer(Box::new(buffer.clone())))
            .build();
        (logger, buffer)
    }

    #[test]
    fn test_caller_frame_names_enclosing_function() {
        let frame = caller_frame!();
        assert!(
            frame.function.ends_with("test_caller_frame_names_enclosing_function"),
            "function was {}",
            frame.function
        );
        assert!(frame.file.ends_with("macros.rs"));
    }

    #[test]
    fn test_log_macro_formats_and_locates() {
        let (logger, buffer) = capture(LogLevel::Info);
        let line = line!() + 1;
        log!(logger, LogLevel::Info, "Formatted: {}", 42);

        let content = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
        assert!(content.contains("INFO Formatted: 42"));
        assert!(content.contains(&format!("macros.rs:{}", line)));
        assert!(content.contains("test_log_macro_formats_and_locates"));
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = capture(LogLevel::Trace);
        trace!(logger, "Value: {}", 10);
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
        fatal!(logger, "Critical failure: {}", "system");

        let content = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
        let levels: Vec<&str> = content
            .lines()
            .filter_map(|l| l.split_whitespace().nth(1))
            .collect();
        assert_eq!(levels, vec!["TRACE", "DEBUG", "INFO", "WARNING", "ERROR", "FATAL"]);
    }
}
