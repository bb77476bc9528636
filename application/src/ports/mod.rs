//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod process_runner;
pub mod progress;
pub mod toolchain;
pub mod workspace_scanner;
