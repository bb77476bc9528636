//! Toolchain execution port.
//!
//! The toolchain knows how to turn a selected tool into a concrete command:
//! argv shape, per-tool timeout, and whether the file list is chunked. Use
//! cases stay free of tool-specific knowledge.

use async_trait::async_trait;
use lft_domain::{CommandResult, ToolDescriptor};

/// Inputs shared by every tool run.
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Directory the child process runs in.
    pub work_dir: String,
    /// Timeout for lint and format commands, in seconds.
    pub quick_timeout: f64,
    /// Timeout for test commands, in seconds.
    pub default_timeout: f64,
    /// File-list length above which lint runs are chunked.
    pub max_files_per_batch: usize,
    /// Exit codes above this abort a chunked run early.
    pub fatal_threshold: i32,
    /// Caller-supplied flags, inserted after the tool's own flags and
    /// before the file list.
    pub custom_args: Vec<String>,
}

impl RunContext {
    pub fn new(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
            quick_timeout: crate::config::QUICK_TIMEOUT,
            default_timeout: crate::config::DEFAULT_TIMEOUT,
            max_files_per_batch: crate::config::MAX_FILES_PER_BATCH,
            fatal_threshold: 1,
            custom_args: Vec::new(),
        }
    }
}

/// A lint run over an explicit file list.
#[derive(Debug, Clone)]
pub struct LintRequest {
    pub tool: ToolDescriptor,
    pub files: Vec<String>,
    pub context: RunContext,
}

/// A format run over an explicit file list.
#[derive(Debug, Clone)]
pub struct FormatRequest {
    pub tool: ToolDescriptor,
    pub files: Vec<String>,
    /// Maximum line length passed to the formatter.
    pub line_length: usize,
    pub context: RunContext,
}

/// A test run against a target ("all" or a path).
#[derive(Debug, Clone)]
pub struct TestRequest {
    pub tool: ToolDescriptor,
    pub target: String,
    pub context: RunContext,
}

/// Runs detected tools as child processes.
///
/// Each method returns `None` when the named tool has no registered runner,
/// so a workspace can *configure* a tool this orchestrator cannot drive.
#[async_trait]
pub trait ToolchainPort: Send + Sync {
    async fn lint(&self, request: &LintRequest) -> Option<CommandResult>;

    async fn format(&self, request: &FormatRequest) -> Option<CommandResult>;

    async fn run_tests(&self, request: &TestRequest) -> Option<CommandResult>;
}
