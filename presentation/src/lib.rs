//! Presentation layer for python-lft
//!
//! This crate contains CLI definitions, output formatters,
//! and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputMode};
pub use output::console::ConsoleRenderer;
pub use output::formatter::{CompactFormatter, ReportFormatter, StandardFormatter, formatter_for};
pub use progress::reporter::{ProgressReporter, SimpleProgress};
