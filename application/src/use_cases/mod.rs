//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod check_configs;
pub mod detect_tools;
pub mod outcome;
pub mod run_format;
pub mod run_lint;
pub mod run_test;
pub(crate) mod shared;
