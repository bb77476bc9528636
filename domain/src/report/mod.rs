//! Classified execution reports.
//!
//! A [`ToolReport`] is the human-facing summary of one lint, format, or test
//! run: a status, a one-line message, optional raw output details, and the
//! counts that classification extracted.

pub mod classify;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome classification for a tool run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolStatus {
    Success,
    Warning,
    Error,
}

impl ToolStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolStatus::Success => "success",
            ToolStatus::Warning => "warning",
            ToolStatus::Error => "error",
        }
    }

    /// True when the run should fail the invoking process.
    pub fn is_error(&self) -> bool {
        matches!(self, ToolStatus::Error)
    }
}

impl fmt::Display for ToolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of one orchestrated operation, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolReport {
    /// Tool that ran, or the operation name when no tool was selected.
    pub tool_name: String,
    pub status: ToolStatus,
    pub message: String,
    /// Raw tool output, kept only when non-blank.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default)]
    pub files_processed: usize,
    #[serde(default)]
    pub files_changed: usize,
    #[serde(default)]
    pub issues_found: usize,
    #[serde(default)]
    pub tests_run: usize,
    #[serde(default)]
    pub tests_passed: usize,
    #[serde(default)]
    pub tests_failed: usize,
}

impl ToolReport {
    fn new(tool_name: impl Into<String>, status: ToolStatus, message: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            status,
            message: message.into(),
            details: None,
            files_processed: 0,
            files_changed: 0,
            issues_found: 0,
            tests_run: 0,
            tests_passed: 0,
            tests_failed: 0,
        }
    }

    pub fn success(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(tool_name, ToolStatus::Success, message)
    }

    pub fn warning(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(tool_name, ToolStatus::Warning, message)
    }

    pub fn error(tool_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(tool_name, ToolStatus::Error, message)
    }

    /// Attach raw output. Blank output is dropped so renderers never print
    /// an empty details block.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        let details = details.into();
        if !details.trim().is_empty() {
            self.details = Some(details);
        }
        self
    }

    pub fn with_files(mut self, processed: usize, changed: usize) -> Self {
        self.files_processed = processed;
        self.files_changed = changed;
        self
    }

    pub fn with_issues(mut self, issues: usize) -> Self {
        self.issues_found = issues;
        self
    }

    pub fn with_tests(mut self, run: usize, passed: usize, failed: usize) -> Self {
        self.tests_run = run;
        self.tests_passed = passed;
        self.tests_failed = failed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_error_status_fails_the_process() {
        assert!(!ToolStatus::Success.is_error());
        assert!(!ToolStatus::Warning.is_error());
        assert!(ToolStatus::Error.is_error());
    }

    #[test]
    fn test_blank_details_are_dropped() {
        let report = ToolReport::success("ruff", "5 files checked, no issues found")
            .with_details("   \n  ");
        assert_eq!(report.details, None);

        let report = ToolReport::error("ruff", "Linting failed").with_details("E501 line too long");
        assert_eq!(report.details.as_deref(), Some("E501 line too long"));
    }

    #[test]
    fn test_builders_set_counts() {
        let report = ToolReport::success("black", "3 files processed, 1 files changed")
            .with_files(3, 1);
        assert_eq!(report.files_processed, 3);
        assert_eq!(report.files_changed, 1);

        let report = ToolReport::error("pytest", "5 tests run, 2 failed").with_tests(5, 3, 2);
        assert_eq!(report.tests_run, 5);
        assert_eq!(report.tests_passed, 3);
        assert_eq!(report.tests_failed, 2);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ToolStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
    }
}
