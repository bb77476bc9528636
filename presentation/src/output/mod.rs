//! Output rendering: report formatters and console display

pub mod console;
pub mod formatter;

pub use console::ConsoleRenderer;
pub use formatter::{CompactFormatter, ReportFormatter, StandardFormatter, formatter_for};
