//! Local toolchain adapter
//!
//! Maps a selected tool descriptor onto a concrete child process run via
//! the kind registries. Lint runs over large file sets are chunked;
//! recursive scanners and all formatters and testers run as one process.

use super::formatters::FormatterKind;
use super::linters::LinterKind;
use super::testers::TesterKind;
use async_trait::async_trait;
use lft_application::{
    FormatRequest, LintRequest, ProcessRunner, TestRequest, ToolchainPort,
};
use lft_domain::{CommandResult, combine};
use std::sync::Arc;
use tracing::{debug, warn};

/// Toolchain that executes tools on the local machine.
pub struct LocalToolchain {
    runner: Arc<dyn ProcessRunner>,
}

impl LocalToolchain {
    pub fn new(runner: Arc<dyn ProcessRunner>) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl ToolchainPort for LocalToolchain {
    async fn lint(&self, request: &LintRequest) -> Option<CommandResult> {
        let Some(kind) = LinterKind::from_name(&request.tool.name) else {
            warn!("No linter runner registered for '{}'", request.tool.name);
            return None;
        };
        let base = kind.command(&request.tool.command, &request.context);

        if kind.scans_recursively() {
            return Some(self.runner.run(&base).await);
        }

        if request.files.len() > request.context.max_files_per_batch {
            debug!(
                "Chunking lint run: {} files in batches of {}",
                request.files.len(),
                request.context.max_files_per_batch
            );
            let results = self
                .runner
                .run_chunked(
                    &base,
                    &request.files,
                    request.context.max_files_per_batch,
                    request.context.fatal_threshold,
                )
                .await;
            return Some(combine(&results));
        }

        let spec = base.args(request.files.iter().cloned());
        Some(self.runner.run(&spec).await)
    }

    async fn format(&self, request: &FormatRequest) -> Option<CommandResult> {
        let Some(kind) = FormatterKind::from_name(&request.tool.name) else {
            warn!("No formatter runner registered for '{}'", request.tool.name);
            return None;
        };
        let spec = kind
            .command(&request.tool.command, request.line_length, &request.context)
            .args(request.files.iter().cloned());
        Some(self.runner.run(&spec).await)
    }

    async fn run_tests(&self, request: &TestRequest) -> Option<CommandResult> {
        let Some(kind) = TesterKind::from_name(&request.tool.name) else {
            warn!("No test runner registered for '{}'", request.tool.name);
            return None;
        };
        let spec = kind.command(&request.tool.command, &request.target, &request.context);
        Some(self.runner.run(&spec).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lft_application::{CommandSpec, RunContext};
    use lft_domain::ToolDescriptor;
    use std::sync::Mutex;

    /// Runner that records every spec and returns a fixed result.
    struct RecordingRunner {
        specs: Mutex<Vec<CommandSpec>>,
    }

    impl RecordingRunner {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                specs: Mutex::new(Vec::new()),
            })
        }

        fn recorded(&self) -> Vec<CommandSpec> {
            self.specs.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ProcessRunner for RecordingRunner {
        async fn run(&self, spec: &CommandSpec) -> CommandResult {
            self.specs.lock().unwrap().push(spec.clone());
            CommandResult::new(0, "", "")
        }
    }

    fn tool(name: &str) -> ToolDescriptor {
        ToolDescriptor::detected(name, vec!["pyproject.toml".to_string()], None)
    }

    fn files(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("f{i}.py")).collect()
    }

    #[tokio::test]
    async fn test_lint_small_file_set_runs_once() {
        let runner = RecordingRunner::new();
        let toolchain = LocalToolchain::new(runner.clone());

        let request = LintRequest {
            tool: tool("ruff"),
            files: files(3),
            context: RunContext::new("."),
        };
        let result = toolchain.lint(&request).await;

        assert!(result.is_some());
        let specs = runner.recorded();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].program, "ruff");
        assert_eq!(specs[0].args, vec!["check", "f0.py", "f1.py", "f2.py"]);
    }

    #[tokio::test]
    async fn test_lint_large_file_set_is_chunked() {
        let runner = RecordingRunner::new();
        let toolchain = LocalToolchain::new(runner.clone());

        let mut context = RunContext::new(".");
        context.max_files_per_batch = 2;
        let request = LintRequest {
            tool: tool("flake8"),
            files: files(5),
            context,
        };
        toolchain.lint(&request).await;

        let specs = runner.recorded();
        assert_eq!(specs.len(), 3);
        assert_eq!(specs[0].args, vec!["f0.py", "f1.py"]);
        assert_eq!(specs[2].args, vec!["f4.py"]);
    }

    #[tokio::test]
    async fn test_lint_unregistered_tool_returns_none() {
        let runner = RecordingRunner::new();
        let toolchain = LocalToolchain::new(runner.clone());

        let request = LintRequest {
            tool: tool("pydocstyle"),
            files: files(2),
            context: RunContext::new("."),
        };
        assert!(toolchain.lint(&request).await.is_none());
        assert!(runner.recorded().is_empty());
    }

    #[tokio::test]
    async fn test_lint_recursive_scanner_ignores_file_list() {
        let runner = RecordingRunner::new();
        let toolchain = LocalToolchain::new(runner.clone());

        let mut context = RunContext::new(".");
        context.max_files_per_batch = 2;
        let request = LintRequest {
            tool: tool("bandit"),
            files: files(10),
            context,
        };
        toolchain.lint(&request).await;

        let specs = runner.recorded();
        assert_eq!(specs.len(), 1);
        assert_eq!(specs[0].args, vec!["-r", "."]);
    }

    #[tokio::test]
    async fn test_format_appends_files() {
        let runner = RecordingRunner::new();
        let toolchain = LocalToolchain::new(runner.clone());

        let request = FormatRequest {
            tool: tool("black"),
            files: files(2),
            line_length: 100,
            context: RunContext::new("."),
        };
        let result = toolchain.format(&request).await;

        assert!(result.is_some());
        let specs = runner.recorded();
        assert_eq!(
            specs[0].args,
            vec!["--line-length", "100", "f0.py", "f1.py"]
        );
    }

    #[tokio::test]
    async fn test_run_tests_dispatches_target() {
        let runner = RecordingRunner::new();
        let toolchain = LocalToolchain::new(runner.clone());

        let request = TestRequest {
            tool: tool("pytest"),
            target: "tests/test_api.py".to_string(),
            context: RunContext::new("."),
        };
        toolchain.run_tests(&request).await;

        let specs = runner.recorded();
        assert_eq!(
            specs[0].args,
            vec!["--maxfail=1", "--disable-warnings", "tests/test_api.py"]
        );
    }

    #[tokio::test]
    async fn test_unknown_formatter_and_tester_return_none() {
        let runner = RecordingRunner::new();
        let toolchain = LocalToolchain::new(runner.clone());

        let format_request = FormatRequest {
            tool: tool("prettier"),
            files: files(1),
            line_length: 88,
            context: RunContext::new("."),
        };
        assert!(toolchain.format(&format_request).await.is_none());

        let test_request = TestRequest {
            tool: tool("tox"),
            target: "all".to_string(),
            context: RunContext::new("."),
        };
        assert!(toolchain.run_tests(&test_request).await.is_none());
        assert!(runner.recorded().is_empty());
    }
}
