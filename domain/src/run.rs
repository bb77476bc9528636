//! Raw command execution results and the chunk-merge reduction.

use serde::{Deserialize, Serialize};

/// Exit code 124 marks a run that was killed after exceeding its timeout,
/// matching the convention of coreutils `timeout`.
pub const TIMEOUT_EXIT_CODE: i32 = 124;

/// Captured outcome of one child process run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandResult {
    pub fn new(exit_code: i32, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Result for a run that was killed on timeout.
    pub fn timed_out(timeout_secs: f64) -> Self {
        Self::new(
            TIMEOUT_EXIT_CODE,
            "",
            format!("Command timed out after {timeout_secs}s"),
        )
    }

    /// Result for a command that could not be spawned at all.
    pub fn spawn_failed(reason: impl std::fmt::Display) -> Self {
        Self::new(1, "", format!("Failed to execute command: {reason}"))
    }

    /// True when the command exited cleanly.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Stdout and stderr concatenated and trimmed, for classification.
    pub fn output(&self) -> String {
        format!("{}{}", self.stdout, self.stderr).trim().to_string()
    }
}

/// Merge per-chunk results into a single result.
///
/// The merged exit code is the maximum across inputs (0 for an empty slice).
/// Stdout and stderr are the newline-joined non-blank parts, in input order,
/// so a clean chunk contributes nothing to the merged text.
pub fn combine(results: &[CommandResult]) -> CommandResult {
    if results.is_empty() {
        return CommandResult::new(0, "", "");
    }
    let exit_code = results.iter().map(|r| r.exit_code).max().unwrap_or(0);
    let stdout = join_non_blank(results.iter().map(|r| r.stdout.as_str()));
    let stderr = join_non_blank(results.iter().map(|r| r.stderr.as_str()));
    CommandResult {
        exit_code,
        stdout,
        stderr,
    }
}

fn join_non_blank<'a>(parts: impl Iterator<Item = &'a str>) -> String {
    parts
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
