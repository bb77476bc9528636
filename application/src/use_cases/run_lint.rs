//! Run Lint use case.
//!
//! Selects a linter for the workspace, runs it over the discovered Python
//! files, and classifies the result:
//!
//! - exit 0 → success, "no issues found"
//! - exit within the fatal threshold → warning, "issues found"
//! - anything higher → error, "Linting failed"

use crate::config::LftConfig;
use crate::ports::progress::{NoProgress, RunProgress};
use crate::ports::toolchain::{LintRequest, ToolchainPort};
use crate::ports::workspace_scanner::WorkspaceScanner;
use crate::use_cases::outcome::RunOutcome;
use crate::use_cases::shared::{no_tool_report, run_context, select_tool};
use lft_domain::{CommandResult, ToolCategory, ToolReport, detect_category};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Input for the [`RunLintUseCase`].
#[derive(Debug, Clone)]
pub struct RunLintInput {
    /// `"all"` for recursive discovery, or one `.py` path.
    pub target: String,
    /// Explicit linter request. `None` selects by preference and priority.
    pub tool: Option<String>,
    /// Workspace root the linter runs in.
    pub work_dir: String,
    /// Extra flags inserted before the file list.
    pub custom_args: Vec<String>,
    /// One-off settings override for this invocation.
    pub config: Option<LftConfig>,
}

impl RunLintInput {
    pub fn new() -> Self {
        Self {
            target: "all".to_string(),
            tool: None,
            work_dir: ".".to_string(),
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

    pub fn with_custom_args(mut self, args: Vec<String>) -> Self {
        self.custom_args = args;
        self
    }

    pub fn with_config(mut self, config: LftConfig) -> Self {
        self.config = Some(config);
        self
    }
}

impl Default for RunLintInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Use case for linting a workspace.
pub struct RunLintUseCase {
    scanner: Arc<dyn WorkspaceScanner>,
    toolchain: Arc<dyn ToolchainPort>,
    config: LftConfig,
}

impl RunLintUseCase {
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

    pub async fn execute(&self, input: RunLintInput) -> RunOutcome {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: RunLintInput,
        progress: &dyn RunProgress,
    ) -> RunOutcome {
        let config = input.config.as_ref().unwrap_or(&self.config);
        let dir = Path::new(&input.work_dir);
        if !self.scanner.workspace_exists(dir) {
            return RunOutcome::report_only(ToolReport::error(
                "lint",
                format!("Working directory not found: {}", input.work_dir),
            ));
        }

        let files = self.scanner.python_files(dir, &input.target);
        if files.is_empty() {
            return RunOutcome::report_only(ToolReport::warning(
                "lint",
                "No Python files found to lint",
            ));
        }

        let snapshot = self.scanner.scan_configs(dir);
        let linters = detect_category(ToolCategory::Linter, &snapshot);
        let requested = input.tool.as_deref();
        let Some(tool) = select_tool(&linters, requested, config.preferred_linter.as_deref())
        else {
            return RunOutcome::report_only(no_tool_report(
                ToolCategory::Linter,
                requested,
                &linters,
            ));
        };

        info!("Linting {} files with {}", files.len(), tool.name);
        progress.on_run_start(&tool.name, files.len());

        let request = LintRequest {
            tool: tool.clone(),
            files: files.clone(),
            context: run_context(config, &input.work_dir, &input.custom_args, &tool.name),
        };
        let Some(result) = self.toolchain.lint(&request).await else {
            // Configured but not runnable by this orchestrator.
            return RunOutcome::report_only(no_tool_report(
                ToolCategory::Linter,
                requested,
                &linters,
            ));
        };

        let threshold = config.fatal_threshold_for(&tool.name);
        let report = classify(&tool.name, files.len(), &result, threshold);
        progress.on_run_complete(&tool.name, report.status);
        RunOutcome::executed(report, result)
    }
}

fn classify(tool: &str, file_count: usize, result: &CommandResult, threshold: i32) -> ToolReport {
    let output = result.output();
    if result.success() {
        ToolReport::success(tool, format!("{file_count} files checked, no issues found"))
            .with_details(output)
            .with_files(file_count, 0)
    } else if result.exit_code > 0 && result.exit_code <= threshold {
        let issues = output.lines().filter(|l| !l.trim().is_empty()).count();
        ToolReport::warning(tool, format!("{file_count} files checked, issues found"))
            .with_details(output)
            .with_files(file_count, 0)
            .with_issues(issues)
    } else {
        ToolReport::error(tool, "Linting failed").with_details(output)
    }
}
