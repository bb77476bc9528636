//! Run Format use case.
//!
//! Selects a formatter, rewrites the discovered Python files in place, and
//! reports how many files changed. Formatters that exit non-zero are
//! treated as failed, never as "found changes".

use crate::config::LftConfig;
use crate::ports::progress::{NoProgress, RunProgress};
use crate::ports::toolchain::{FormatRequest, ToolchainPort};
use crate::ports::workspace_scanner::WorkspaceScanner;
use crate::use_cases::outcome::RunOutcome;
use crate::use_cases::shared::{no_tool_report, run_context, select_tool};
use lft_domain::{
    CommandResult, ToolCategory, ToolReport, count_changed_files, detect_category,
};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Default maximum line length handed to formatters.
pub const DEFAULT_LINE_LENGTH: usize = 88;

/// Input for the [`RunFormatUseCase`].
#[derive(Debug, Clone)]
pub struct RunFormatInput {
    /// `"all"` for recursive discovery, or one `.py` path.
    pub target: String,
    /// Explicit formatter request.
    pub tool: Option<String>,
    /// Workspace root the formatter runs in.
    pub work_dir: String,
    /// Maximum line length passed to the formatter.
    pub line_length: usize,
    /// Extra flags inserted before the file list.
    pub custom_args: Vec<String>,
    /// One-off settings override for this invocation.
    pub config: Option<LftConfig>,
}

impl RunFormatInput {
    pub fn new() -> Self {
        Self {
            target: "all".to_string(),
            tool: None,
            work_dir: ".".to_string(),
            line_length: DEFAULT_LINE_LENGTH,
            custom_args: Vec::new(),
            config: None,
        }
    }

    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = Some(tool.into());
        self
    }

    pub fn with_work_dir(mut self, dir: impl Into<String>) -> Self {
        self.work_dir = dir.into();
        self
    }

    pub fn with_line_length(mut self, length: usize) -> Self {
        self.line_length = length;
        self
    }

    pub fn with_custom_args(mut self, args: Vec<String>) -> Self {
        self.custom_args = args;
        self
    }

    pub fn with_config(mut self, config: LftConfig) -> Self {
        self.config = Some(config);
        self
    }
}

impl Default for RunFormatInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Use case for formatting a workspace.
pub struct RunFormatUseCase {
    scanner: Arc<dyn WorkspaceScanner>,
    toolchain: Arc<dyn ToolchainPort>,
    config: LftConfig,
}

impl RunFormatUseCase {
    pub fn new(
        scanner: Arc<dyn WorkspaceScanner>,
        toolchain: Arc<dyn ToolchainPort>,
        config: LftConfig,
    ) -> Self {
        Self {
            scanner,
            toolchain,
            config,
        }
    }

    pub async fn execute(&self, input: RunFormatInput) -> RunOutcome {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: RunFormatInput,
        progress: &dyn RunProgress,
    ) -> RunOutcome {
        let config = input.config.as_ref().unwrap_or(&self.config);
        let dir = Path::new(&input.work_dir);
        if !self.scanner.workspace_exists(dir) {
            return RunOutcome::report_only(ToolReport::error(
                "format",
                format!("Working directory not found: {}", input.work_dir),
            ));
        }

        let files = self.scanner.python_files(dir, &input.target);
        if files.is_empty() {
            return RunOutcome::report_only(ToolReport::warning(
                "format",
                "No Python files found to format",
            ));
        }

        let snapshot = self.scanner.scan_configs(dir);
        let formatters = detect_category(ToolCategory::Formatter, &snapshot);
        let requested = input.tool.as_deref();
        let Some(tool) = select_tool(&formatters, requested, config.preferred_formatter.as_deref())
        else {
            return RunOutcome::report_only(no_tool_report(
                ToolCategory::Formatter,
                requested,
                &formatters,
            ));
        };

        info!("Formatting {} files with {}", files.len(), tool.name);
        progress.on_run_start(&tool.name, files.len());

        let request = FormatRequest {
            tool: tool.clone(),
            files: files.clone(),
            line_length: input.line_length,
            context: run_context(config, &input.work_dir, &input.custom_args, &tool.name),
        };
        let Some(result) = self.toolchain.format(&request).await else {
            return RunOutcome::report_only(no_tool_report(
                ToolCategory::Formatter,
                requested,
                &formatters,
            ));
        };

        let report = classify(&tool.name, files.len(), &result);
        progress.on_run_complete(&tool.name, report.status);
        RunOutcome::executed(report, result)
    }
}

fn classify(tool: &str, file_count: usize, result: &CommandResult) -> ToolReport {
    let output = result.output();
    if result.success() {
        let changed = count_changed_files(tool, &output);
        if changed > 0 {
            ToolReport::success(
                tool,
                format!("{file_count} files processed, {changed} files changed"),
            )
            .with_details(output)
            .with_files(file_count, changed)
        } else {
            ToolReport::success(tool, format!("{file_count} files processed, no changes needed"))
                .with_files(file_count, 0)
        }
    } else {
        ToolReport::error(tool, "Formatting failed").with_details(output)
    }
}
