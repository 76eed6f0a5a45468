//! Main logger implementation

use super::{
    caller::CallFrame,
    error::Result,
    formatter::FormatterConfig,
    hook::Hook,
    log_entry::LogEntry,
    log_level::LogLevel,
};
use parking_lot::Mutex;
use std::any::Any;
use std::io::Write;
use std::panic::Location;

/// Primary destination for formatted records
#[derive(Default)]
pub enum Output {
    /// Standard error, for every level
    #[default]
    Stderr,
    /// Any writer, e.g. a buffer captured in tests
    Writer(Box<dyn Write + Send>),
}

impl Output {
    pub fn name(&self) -> &str {
        match self {
            Output::Stderr => "stderr",
            Output::Writer(_) => "writer",
        }
    }

    fn write_line(&mut self, line: &str) -> std::io::Result<()> {
        match self {
            Output::Stderr => writeln!(std::io::stderr(), "{}", line),
            Output::Writer(writer) => writeln!(writer, "{}", line),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Output::Stderr => std::io::stderr().flush(),
            Output::Writer(writer) => writer.flush(),
        }
    }
}

/// A configured logger.
///
/// Configuration is fixed at build time: the formatter, minimum level and
/// hook list of a logger never change once [`LoggerBuilder::build`] returns.
pub struct Logger {
    min_level: LogLevel,
    report_caller: bool,
    formatter: FormatterConfig,
    output: Mutex<Output>,
    hooks: Mutex<Vec<Box<dyn Hook>>>,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use preset_logger::prelude::*;
    ///
    /// let logger = Logger::builder()
    ///     .min_level(LogLevel::Debug)
    ///     .report_caller(true)
    ///     .build();
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub fn reports_caller(&self) -> bool {
        self.report_caller
    }

    pub fn formatter(&self) -> &FormatterConfig {
        &self.formatter
    }

    /// Name of the primary output
    pub fn output_name(&self) -> String {
        self.output.lock().name().to_string()
    }

    /// Names of the attached hooks, in firing order
    pub fn hook_names(&self) -> Vec<String> {
        self.hooks.lock().iter().map(|h| h.name().to_string()).collect()
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    /// Log a message, annotated with the calling function, file and line
    /// when caller reporting is enabled.
    #[track_caller]
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message.into());
        if self.report_caller {
            let frame = CallFrame::capture(Location::caller());
            self.dispatch(entry.with_caller(frame));
        } else {
            self.dispatch(entry);
        }
    }

    /// Log a message with an explicitly captured call frame.
    ///
    /// This is what the logging macros expand to; the frame carries the
    /// enclosing function as well as the file and line.
    pub fn log_at(&self, level: LogLevel, frame: CallFrame, message: impl Into<String>) {
        if !self.is_enabled(level) {
            return;
        }

        let entry = LogEntry::new(level, message.into());
        if self.report_caller {
            self.dispatch(entry.with_caller(frame));
        } else {
            self.dispatch(entry);
        }
    }

    fn dispatch(&self, entry: LogEntry) {
        self.fire_hooks(&entry);

        let line = self.formatter.format(&entry);
        if let Err(e) = self.output.lock().write_line(&line) {
            eprintln!("[LOGGER ERROR] Failed to write to output: {}", e);
        }
    }

    /// Fire every hook that accepts the entry, with per-hook panic isolation
    /// so one failing hook does not stop the others.
    fn fire_hooks(&self, entry: &LogEntry) {
        let mut hooks = self.hooks.lock();

        for (idx, hook) in hooks.iter_mut().enumerate() {
            if !hook.accepts(entry.level) {
                continue;
            }

            let fire_result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| hook.fire(entry)));

            match fire_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Hook #{} ({}) failed: {}", idx, hook.name(), e);
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Hook #{} ({}) panicked: {}. \
                         Other hooks continue to function.",
                        idx,
                        hook.name(),
                        panic_message(panic_info.as_ref())
                    );
                }
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        for hook in self.hooks.lock().iter_mut() {
            hook.flush()?;
        }
        self.output.lock().flush()?;
        Ok(())
    }

    #[inline]
    #[track_caller]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    #[track_caller]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    #[track_caller]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    #[track_caller]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    #[track_caller]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at Fatal level. The process keeps running.
    #[inline]
    #[track_caller]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use preset_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(LogLevel::Warn)
///     .formatter(FormatterConfig::new().with_full_timestamp(true))
///     .output(Output::Writer(Box::new(std::io::sink())))
///     .build();
/// ```
pub struct LoggerBuilder {
    min_level: LogLevel,
    report_caller: bool,
    formatter: FormatterConfig,
    output: Output,
    hooks: Vec<Box<dyn Hook>>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            min_level: LogLevel::Info,
            report_caller: false,
            formatter: FormatterConfig::default(),
            output: Output::default(),
            hooks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn report_caller(mut self, enabled: bool) -> Self {
        self.report_caller = enabled;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: FormatterConfig) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    /// Attach a hook; hooks fire in the order they were added
    #[must_use = "builder methods return a new value"]
    pub fn hook<H: Hook + 'static>(mut self, hook: H) -> Self {
        self.hooks.push(Box::new(hook));
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            min_level: self.min_level,
            report_caller: self.report_caller,
            formatter: self.formatter,
            output: Mutex::new(self.output),
            hooks: Mutex::new(self.hooks),
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
