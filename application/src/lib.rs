//! Application layer for python-lft
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_TIMEOUT, LftConfig, MAX_FILES_PER_BATCH, QUICK_TIMEOUT};
pub use ports::{
    process_runner::{CommandSpec, ProcessRunner},
    progress::{NoProgress, RunProgress},
    toolchain::{FormatRequest, LintRequest, RunContext, TestRequest, ToolchainPort},
    workspace_scanner::WorkspaceScanner,
};
pub use use_cases::check_configs::{CheckConfigsInput, CheckConfigsUseCase};
pub use use_cases::detect_tools::{DetectToolsInput, DetectToolsUseCase};
pub use use_cases::outcome::RunOutcome;
pub use use_cases::run_format::{DEFAULT_LINE_LENGTH, RunFormatInput, RunFormatUseCase};
pub use use_cases::run_lint::{RunLintInput, RunLintUseCase};
pub use use_cases::run_test::{RunTestInput, RunTestUseCase};
