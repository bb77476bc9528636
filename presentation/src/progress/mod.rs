//! Progress reporting during tool runs

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
