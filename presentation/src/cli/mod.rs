//! CLI argument definitions

pub mod commands;

pub use commands::{Cli, Command, OutputMode};
