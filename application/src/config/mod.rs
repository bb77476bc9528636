//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave:
//!
//! - [`LftConfig`] — timeouts, chunking, exit-code interpretation, preferences

pub mod lft_config;

pub use lft_config::{DEFAULT_TIMEOUT, LftConfig, MAX_FILES_PER_BATCH, QUICK_TIMEOUT};
