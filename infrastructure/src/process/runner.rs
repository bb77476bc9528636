//! Tokio-backed child process execution
//!
//! The only place in the codebase that actually spawns processes. Spawn
//! failures and timeouts are folded into [`CommandResult`] so callers never
//! see an error channel, and the child is always dead by the time a call
//! returns.

use async_trait::async_trait;
use lft_application::{CommandSpec, ProcessRunner};
use lft_domain::CommandResult;
use std::process::Stdio;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::debug;

/// Runs commands as real child processes on the tokio runtime.
#[derive(Debug, Default, Clone)]
pub struct TokioProcessRunner;

impl TokioProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

/// Read a captured pipe to EOF, tolerating invalid UTF-8.
async fn drain<R>(pipe: Option<R>) -> String
where
    R: AsyncRead + Unpin,
{
    let Some(mut pipe) = pipe else {
        return String::new();
    };
    let mut buf = Vec::new();
    let _ = pipe.read_to_end(&mut buf).await;
    String::from_utf8_lossy(&buf).into_owned()
}

#[async_trait]
impl ProcessRunner for TokioProcessRunner {
    async fn run(&self, spec: &CommandSpec) -> CommandResult {
        debug!("Running command: {}", spec.display_line());

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .current_dir(&spec.cwd)
            .envs(&spec.env)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        // Linux: request kernel to send SIGTERM to child when parent dies.
        // This catches cases where Drop doesn't run (SIGKILL, OOM kill)
        #[cfg(target_os = "linux")]
        unsafe {
            command.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                debug!("Spawn failed for {}: {err}", spec.program);
                return CommandResult::spawn_failed(err);
            }
        };

        // Drain both pipes while waiting so a chatty child can't fill the
        // pipe buffer and stall before exiting.
        let stdout_task = tokio::spawn(drain(child.stdout.take()));
        let stderr_task = tokio::spawn(drain(child.stderr.take()));

        match tokio::time::timeout(spec.timeout, child.wait()).await {
            Ok(Ok(status)) => {
                let stdout = stdout_task.await.unwrap_or_default();
                let stderr = stderr_task.await.unwrap_or_default();
                CommandResult::new(status.code().unwrap_or(-1), stdout, stderr)
            }
            Ok(Err(err)) => {
                stdout_task.abort();
                stderr_task.abort();
                CommandResult::spawn_failed(err)
            }
            Err(_) => {
                debug!(
                    "Command timed out after {:?}: {}",
                    spec.timeout,
                    spec.display_line()
                );
                // Kill and reap so the child is gone before we return.
                let _ = child.start_kill();
                let _ = child.wait().await;
                stdout_task.abort();
                stderr_task.abort();
                CommandResult::timed_out(spec.timeout.as_secs_f64())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lft_domain::TIMEOUT_EXIT_CODE;
    use std::time::Duration;

    fn spec(program: &str) -> CommandSpec {
        CommandSpec::new(program, ".", Duration::from_secs(5))
    }

    #[tokio::test]
    async fn test_run_captures_stdout() {
        let result = TokioProcessRunner::new().run(&spec("echo").arg("hello")).await;
        assert_eq!(result.exit_code, 0);
        assert!(result.stdout.contains("hello"));
        assert!(result.success());
    }

    #[tokio::test]
    async fn test_run_reports_exit_code_and_stderr() {
        let result = TokioProcessRunner::new()
            .run(&spec("sh").args(["-c", "echo oops >&2; exit 3"]))
            .await;
        assert_eq!(result.exit_code, 3);
        assert!(result.stderr.contains("oops"));
        assert!(!result.success());
    }

    #[tokio::test]
    async fn test_run_drains_output_larger_than_pipe_buffer() {
        let noisy = spec("sh").args(["-c", "yes x | head -n 100000"]);
        let result = TokioProcessRunner::new().run(&noisy).await;
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.stdout.lines().count(), 100000);
    }

    #[tokio::test]
    async fn test_run_times_out_and_kills_child() {
        let slow = CommandSpec::new("sleep", ".", Duration::from_millis(100)).arg("30");
        let result = TokioProcessRunner::new().run(&slow).await;
        assert_eq!(result.exit_code, TIMEOUT_EXIT_CODE);
        assert!(result.stderr.contains("timed out"));
    }

    #[tokio::test]
    async fn test_run_spawn_failure_is_a_result() {
        let result = TokioProcessRunner::new()
            .run(&spec("definitely-not-a-real-command-xyz"))
            .await;
        assert_eq!(result.exit_code, 1);
        assert!(result.stderr.contains("Failed to execute command"));
    }

    #[tokio::test]
    async fn test_run_respects_working_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();

        let listing = CommandSpec::new("ls", dir.path().to_string_lossy(), Duration::from_secs(5));
        let result = TokioProcessRunner::new().run(&listing).await;
        assert!(result.stdout.contains("marker.txt"));
    }

    #[tokio::test]
    async fn test_run_passes_extra_environment() {
        let printer = spec("sh")
            .args(["-c", "echo $LFT_TEST_MARKER"])
            .env("LFT_TEST_MARKER", "present");
        let result = TokioProcessRunner::new().run(&printer).await;
        assert!(result.stdout.contains("present"));
    }
}
