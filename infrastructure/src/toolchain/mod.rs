//! Tool execution adapters
//!
//! Each category has a closed kind enum acting as the runner registry: a
//! detected tool name maps to a variant or to nothing, and an unmapped name
//! means "no runner" rather than a guessed argv. [`LocalToolchain`] wires
//! the registries to a [`lft_application::ProcessRunner`].

mod formatters;
mod linters;
mod local;
mod testers;

pub use formatters::FormatterKind;
pub use linters::LinterKind;
pub use local::LocalToolchain;
pub use testers::TesterKind;
