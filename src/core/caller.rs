//! Caller-location capture and presentation
//!
//! A [`CallFrame`] describes the call site that emitted a record. The helpers
//! here shorten its slash-delimited paths and decorate them for the console
//! and file presets.

use std::panic::Location;
use std::sync::Arc;

/// Turns a call frame into a `(function label, location label)` pair.
pub type CallerPrettifier = Arc<dyn Fn(&CallFrame) -> (String, String) + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    pub function: String,
    pub file: String,
    pub line: u32,
}

impl CallFrame {
    pub fn new(function: impl Into<String>, file: impl Into<String>, line: u32) -> Self {
        Self {
            function: function.into(),
            file: file.into(),
            line,
        }
    }

    /// Frame for a `#[track_caller]` location.
    ///
    /// The enclosing function is looked up on the current stack; without
    /// debug info it cannot be found and the function identifier stays empty.
    pub fn capture(location: &Location<'_>) -> Self {
        let function = resolve_function(location).unwrap_or_default();
        Self::new(function, location.file(), location.line())
    }
}

/// Presentation style for caller labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CallerStyle {
    /// Console style: labels carry their own ` | ` separators
    #[default]
    Colorized,
    /// Bare names, used for plain consoles and file sinks
    Plain,
}

/// Name of the function whose frame is executing at `location`.
///
/// Walks the stack and returns the first symbol whose debug info points at
/// the same file and line, demangled without its hash suffix.
pub fn resolve_function(location: &Location<'_>) -> Option<String> {
    let mut found: Option<String> = None;

    backtrace::trace(|frame| {
        backtrace::resolve_frame(frame, |symbol| {
            if found.is_some() || symbol.lineno() != Some(location.line()) {
                return;
            }
            let same_file = symbol
                .filename()
                .is_some_and(|file| file.ends_with(location.file()));
            if same_file {
                found = symbol.name().map(|name| format!("{:#}", name));
            }
        });
        found.is_none()
    });

    found
}

/// Last `/`-delimited segment of `path`.
///
/// ```
/// use preset_logger::core::caller::shorten;
///
/// assert_eq!(shorten("/srv/app/src/main.rs"), "main.rs");
/// assert_eq!(shorten("main.rs"), "main.rs");
/// ```
pub fn shorten(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

pub fn format_function(function: &str) -> String {
    format!(" | {} |", shorten(function))
}

pub fn format_file_path(path: &str) -> String {
    format!(" | {}", shorten(path))
}

pub fn format_plain(path: &str) -> String {
    shorten(path).to_string()
}

/// Build the `(function, file:line)` labels for `frame` in the given style.
pub fn prettify(frame: &CallFrame, style: CallerStyle) -> (String, String) {
    match style {
        CallerStyle::Colorized => (
            // No decoration around a missing function name
            if shorten(&frame.function).is_empty() {
                String::new()
            } else {
                format_function(&frame.function)
            },
            format!("{}:{}", format_file_path(&frame.file), frame.line),
        ),
        CallerStyle::Plain => (
            format_plain(&frame.function),
            format!("{}:{}", format_plain(&frame.file), frame.line),
        ),
    }
}

/// Wrap [`prettify`] for installation on a formatter.
pub fn caller_prettifier(style: CallerStyle) -> CallerPrettifier {
    Arc::new(move |frame: &CallFrame| prettify(frame, style))
}

/// Strip the marker item name appended by [`caller_frame!`](crate::caller_frame).
#[doc(hidden)]
pub fn enclosing_function(marker_path: &'static str) -> &'static str {
    marker_path.strip_suffix("::__marker").unwrap_or(marker_path)
}
