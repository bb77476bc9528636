//! Progress reporting for tool runs.

use colored::{ColoredString, Colorize};
use indicatif::{ProgressBar, ProgressStyle};
use lft_application::RunProgress;
use lft_domain::ToolStatus;
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a terminal spinner while a tool runs
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap()
    }

    fn status_marker(status: ToolStatus) -> ColoredString {
        match status {
            ToolStatus::Success => "v".green(),
            ToolStatus::Warning => "!".yellow(),
            ToolStatus::Error => "x".red(),
        }
    }

    fn start_message(file_count: usize) -> String {
        if file_count > 0 {
            format!("{file_count} files...")
        } else {
            "running...".to_string()
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RunProgress for ProgressReporter {
    fn on_run_start(&self, tool: &str, file_count: usize) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(tool.to_string());
        pb.set_message(Self::start_message(file_count));
        pb.enable_steady_tick(Duration::from_millis(100));

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_run_complete(&self, _tool: &str, status: ToolStatus) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{} {}", Self::status_marker(status), status));
        }
    }
}

/// Simple line-based progress (no fancy UI)
///
/// Writes to stderr so machine-readable stdout stays clean.
pub struct SimpleProgress;

impl RunProgress for SimpleProgress {
    fn on_run_start(&self, tool: &str, file_count: usize) {
        eprintln!(
            "{} {} {}",
            "->".cyan(),
            tool.bold(),
            ProgressReporter::start_message(file_count)
        );
    }

    fn on_run_complete(&self, tool: &str, status: ToolStatus) {
        match status {
            ToolStatus::Success => eprintln!("  {} {}", "v".green(), tool),
            ToolStatus::Warning => eprintln!("  {} {} (warnings)", "!".yellow(), tool),
            ToolStatus::Error => eprintln!("  {} {} (failed)", "x".red(), tool),
        }
    }
}
