//! Hook implementations

pub mod file_sink;

pub use file_sink::FileSinkHook;

pub use crate::core::Hook;
