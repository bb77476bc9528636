//! Infrastructure layer for python-lft
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: filesystem workspace scanning, child process
//! execution, the local toolchain, and configuration file loading.

pub mod config;
pub mod process;
pub mod toolchain;
pub mod workspace;

// Re-export commonly used types
pub use config::{ConfigLoader, ConfigValidationError, FileConfig};
pub use process::TokioProcessRunner;
pub use toolchain::LocalToolchain;
pub use workspace::FsWorkspaceScanner;
