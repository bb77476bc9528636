//! Progress notification port
//!
//! Defines the interface for reporting progress while tools run.

use lft_domain::ToolStatus;

/// Callback for progress updates during an orchestrated run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console spinner, logs, etc.)
pub trait RunProgress: Send + Sync {
    /// Called after tool selection, before any process starts
    fn on_run_start(&self, tool: &str, file_count: usize);

    /// Called once the result has been classified
    fn on_run_complete(&self, tool: &str, status: ToolStatus);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl RunProgress for NoProgress {
    fn on_run_start(&self, _tool: &str, _file_count: usize) {}
    fn on_run_complete(&self, _tool: &str, _status: ToolStatus) {}
}
