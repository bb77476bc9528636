//! Run Test use case.
//!
//! Selects a test runner and executes it against a target. Unlike lint and
//! format, tests take the target path as-is; discovery is the runner's job.

use crate::config::LftConfig;
use crate::ports::progress::{NoProgress, RunProgress};
use crate::ports::toolchain::{TestRequest, ToolchainPort};
use crate::ports::workspace_scanner::WorkspaceScanner;
use crate::use_cases::outcome::RunOutcome;
use crate::use_cases::shared::{no_tool_report, run_context, select_tool};
use lft_domain::{CommandResult, ToolCategory, ToolReport, detect_category, parse_test_counts};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Input for the [`RunTestUseCase`].
#[derive(Debug, Clone)]
pub struct RunTestInput {
    /// `"all"` for full discovery, or a path / module the runner understands.
    pub target: String,
    /// Explicit test runner request.
    pub tool: Option<String>,
    /// Workspace root the runner executes in.
    pub work_dir: String,
    /// Extra flags inserted before the target.
    pub custom_args: Vec<String>,
    /// One-off settings override for this invocation.
    pub config: Option<LftConfig>,
}

impl RunTestInput {
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

impl Default for RunTestInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Use case for running a workspace's tests.
pub struct RunTestUseCase {
    scanner: Arc<dyn WorkspaceScanner>,
    toolchain: Arc<dyn ToolchainPort>,
    config: LftConfig,
}

impl RunTestUseCase {
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

    pub async fn execute(&self, input: RunTestInput) -> RunOutcome {
        self.execute_with_progress(input, &NoProgress).await
    }

    pub async fn execute_with_progress(
        &self,
        input: RunTestInput,
        progress: &dyn RunProgress,
    ) -> RunOutcome {
        let config = input.config.as_ref().unwrap_or(&self.config);
        let dir = Path::new(&input.work_dir);
        if !self.scanner.workspace_exists(dir) {
            return RunOutcome::report_only(ToolReport::error(
                "test",
                format!("Working directory not found: {}", input.work_dir),
            ));
        }

        let snapshot = self.scanner.scan_configs(dir);
        let testers = detect_category(ToolCategory::Tester, &snapshot);
        let requested = input.tool.as_deref();
        let Some(tool) = select_tool(&testers, requested, config.preferred_tester.as_deref())
        else {
            return RunOutcome::report_only(no_tool_report(
                ToolCategory::Tester,
                requested,
                &testers,
            ));
        };

        info!("Running tests with {} (target: {})", tool.name, input.target);
        progress.on_run_start(&tool.name, 0);

        let request = TestRequest {
            tool: tool.clone(),
            target: input.target.clone(),
            context: run_context(config, &input.work_dir, &input.custom_args, &tool.name),
        };
        let Some(result) = self.toolchain.run_tests(&request).await else {
            return RunOutcome::report_only(no_tool_report(
                ToolCategory::Tester,
                requested,
                &testers,
            ));
        };

        let report = classify(&tool.name, &result);
        progress.on_run_complete(&tool.name, report.status);
        RunOutcome::executed(report, result)
    }
}

fn classify(tool: &str, result: &CommandResult) -> ToolReport {
    let output = result.output();
    let counts = parse_test_counts(tool, &output);
    if result.success() && counts.failed == 0 {
        if counts.run > 0 {
            ToolReport::success(tool, format!("{} tests run, all passed", counts.run))
                .with_tests(counts.run, counts.passed, counts.failed)
        } else {
            ToolReport::warning(tool, "No tests found")
        }
    } else if counts.failed > 0 {
        ToolReport::error(
            tool,
            format!("{} tests run, {} failed", counts.run, counts.failed),
        )
        .with_details(output)
        .with_tests(counts.run, counts.passed, counts.failed)
    } else {
        ToolReport::error(tool, "Test execution failed").with_details(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lft_domain::{ConfigSnapshot, ToolStatus};
    use serde_json::json;
    use std::sync::Mutex;

    struct FakeWorkspace {
        snapshot: ConfigSnapshot,
    }

    impl FakeWorkspace {
        fn with_pytest() -> Self {
            let mut snapshot = ConfigSnapshot::new();
            snapshot.insert("pytest.ini", json!({"pytest": {"addopts": "-q"}}));
            Self { snapshot }
        }
    }

    impl WorkspaceScanner for FakeWorkspace {
        fn scan_configs(&self, _dir: &Path) -> ConfigSnapshot {
            self.snapshot.clone()
        }

        fn python_files(&self, _dir: &Path, _target: &str) -> Vec<String> {
            Vec::new()
        }

        fn workspace_exists(&self, _dir: &Path) -> bool {
            true
        }
    }

    struct FakeToolchain {
        result: Option<CommandResult>,
        test_requests: Mutex<Vec<TestRequest>>,
    }

    impl FakeToolchain {
        fn returning(result: Option<CommandResult>) -> Self {
            Self {
                result,
                test_requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl ToolchainPort for FakeToolchain {
        async fn lint(
            &self,
            _request: &crate::ports::toolchain::LintRequest,
        ) -> Option<CommandResult> {
            None
        }

        async fn format(
            &self,
            _request: &crate::ports::toolchain::FormatRequest,
        ) -> Option<CommandResult> {
            None
        }

        async fn run_tests(&self, request: &TestRequest) -> Option<CommandResult> {
            self.test_requests.lock().unwrap().push(request.clone());
            self.result.clone()
        }
    }

    fn use_case(scanner: FakeWorkspace, toolchain: FakeToolchain) -> RunTestUseCase {
        RunTestUseCase::new(Arc::new(scanner), Arc::new(toolchain), LftConfig::default())
    }

    #[tokio::test]
    async fn test_all_passed_reports_success_with_counts() {
        let uc = use_case(
            FakeWorkspace::with_pytest(),
            FakeToolchain::returning(Some(CommandResult::new(
                0,
                "==== 8 passed in 0.42s ====",
                "",
            ))),
        );
        let outcome = uc.execute(RunTestInput::new()).await;
        assert_eq!(outcome.report.status, ToolStatus::Success);
        assert_eq!(outcome.report.message, "8 tests run, all passed");
        assert_eq!(outcome.report.tests_run, 8);
        assert_eq!(outcome.report.tests_passed, 8);
    }

    #[tokio::test]
    async fn test_failures_report_error_with_details() {
        let uc = use_case(
            FakeWorkspace::with_pytest(),
            FakeToolchain::returning(Some(CommandResult::new(
                1,
                "==== 5 passed, 2 failed in 1.03s ====",
                "",
            ))),
        );
        let outcome = uc.execute(RunTestInput::new()).await;
        assert_eq!(outcome.report.status, ToolStatus::Error);
        assert_eq!(outcome.report.message, "7 tests run, 2 failed");
        assert_eq!(outcome.report.tests_failed, 2);
        assert!(outcome.report.details.is_some());
    }

    #[tokio::test]
    async fn test_clean_exit_with_no_tests_is_a_warning() {
        let uc = use_case(
            FakeWorkspace::with_pytest(),
            FakeToolchain::returning(Some(CommandResult::new(0, "no tests ran", ""))),
        );
        let outcome = uc.execute(RunTestInput::new()).await;
        assert_eq!(outcome.report.status, ToolStatus::Warning);
        assert_eq!(outcome.report.message, "No tests found");
    }

    #[tokio::test]
    async fn test_crash_without_counts_is_execution_failure() {
        let uc = use_case(
            FakeWorkspace::with_pytest(),
            FakeToolchain::returning(Some(CommandResult::new(
                2,
                "",
                "ImportError: cannot import name 'app'",
            ))),
        );
        let outcome = uc.execute(RunTestInput::new()).await;
        assert_eq!(outcome.report.status, ToolStatus::Error);
        assert_eq!(outcome.report.message, "Test execution failed");
    }

    #[tokio::test]
    async fn test_no_runner_configured_mentions_unittest_fallback() {
        let uc = use_case(
            FakeWorkspace {
                snapshot: ConfigSnapshot::new(),
            },
            FakeToolchain::returning(None),
        );
        let outcome = uc.execute(RunTestInput::new()).await;
        assert_eq!(outcome.report.status, ToolStatus::Error);
        assert_eq!(outcome.report.message, "No test runner available");
        assert_eq!(
            outcome.report.details.as_deref(),
            Some("Install one of: pytest, nose2, or use unittest")
        );
    }

    #[tokio::test]
    async fn test_target_passes_through_unchanged() {
        let toolchain = Arc::new(FakeToolchain::returning(Some(CommandResult::new(
            0,
            "==== 1 passed in 0.01s ====",
            "",
        ))));
        let uc = RunTestUseCase::new(
            Arc::new(FakeWorkspace::with_pytest()),
            toolchain.clone(),
            LftConfig::default(),
        );
        uc.execute(RunTestInput::new().with_target("tests/test_api.py"))
            .await;
        let requests = toolchain.test_requests.lock().unwrap();
        assert_eq!(requests[0].target, "tests/test_api.py");
    }
}
