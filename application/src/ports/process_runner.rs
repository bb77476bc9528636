//! Child process execution port.
//!
//! Defines the contract for running external tools. Implementations live in
//! the infrastructure layer; use cases and the toolchain only see this trait.

use async_trait::async_trait;
use lft_domain::CommandResult;
use std::collections::HashMap;
use std::time::Duration;

/// One command to spawn.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// Program name or path, resolved via `PATH` by the runner.
    pub program: String,
    pub args: Vec<String>,
    /// Working directory for the child.
    pub cwd: String,
    /// Extra environment variables layered over the parent's.
    pub env: HashMap<String, String>,
    /// The child is killed once this elapses.
    pub timeout: Duration,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, cwd: impl Into<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            env: HashMap::new(),
            timeout,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Full command line for log messages.
    pub fn display_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

/// Executes commands as child processes.
///
/// Implementations must capture both output streams, enforce the timeout by
/// killing the child, and report spawn failures through the result's exit
/// code rather than a separate error channel. A run therefore always yields
/// a [`CommandResult`].
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run one command to completion.
    async fn run(&self, spec: &CommandSpec) -> CommandResult;

    /// Run a file-list command over `files` in fixed-size chunks.
    ///
    /// Each chunk appends its slice of `files` to `base`'s args. Chunks run
    /// sequentially; a chunk exiting above `fatal_threshold` aborts the
    /// remainder. An empty `files` spawns nothing and returns an empty list.
    /// Callers merge the per-chunk results with [`lft_domain::combine`].
    async fn run_chunked(
        &self,
        base: &CommandSpec,
        files: &[String],
        chunk_size: usize,
        fatal_threshold: i32,
    ) -> Vec<CommandResult> {
        let mut results = Vec::new();
        for chunk in files.chunks(chunk_size.max(1)) {
            let spec = base.clone().args(chunk.iter().cloned());
            let result = self.run(&spec).await;
            let fatal = result.exit_code > fatal_threshold;
            results.push(result);
            if fatal {
                break;
            }
        }
        results
    }
}
