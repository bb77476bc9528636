//! Orchestrator runtime settings.
//!
//! [`LftConfig`] groups the knobs shared by every run use case: timeouts,
//! chunking, exit-code interpretation, and tool preferences. These are
//! application-layer concerns, not domain policy.

use lft_domain::FormatterStyle;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Timeout for test runs, in seconds.
pub const DEFAULT_TIMEOUT: f64 = 300.0;

/// Timeout for lint and format runs, in seconds.
pub const QUICK_TIMEOUT: f64 = 30.0;

/// File-list length above which lint runs are split into chunks.
pub const MAX_FILES_PER_BATCH: usize = 200;

/// Runtime settings shared by all use cases.
///
/// A caller can pass a one-off copy per invocation; otherwise the instance
/// the use case was constructed with applies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LftConfig {
    /// Report rendering style.
    pub formatter_style: FormatterStyle,
    /// Timeout for test runs, in seconds.
    pub default_timeout: f64,
    /// Timeout for lint and format runs, in seconds.
    pub quick_timeout: f64,
    /// File-list length above which lint runs are chunked.
    pub max_files_per_batch: usize,
    /// Largest exit code still classified as issues-found rather than
    /// tool failure. Linters conventionally exit 1 for findings and
    /// higher for internal errors.
    pub fatal_exit_threshold: i32,
    /// Per-tool overrides for the fatal exit threshold.
    pub fatal_exit_overrides: HashMap<String, i32>,
    /// Linter used when the caller does not name one.
    pub preferred_linter: Option<String>,
    /// Formatter used when the caller does not name one.
    pub preferred_formatter: Option<String>,
    /// Test runner used when the caller does not name one.
    pub preferred_tester: Option<String>,
    /// Passthrough settings not interpreted by the orchestrator.
    pub extra_config: HashMap<String, Value>,
}

impl Default for LftConfig {
    fn default() -> Self {
        Self {
            formatter_style: FormatterStyle::Standard,
            default_timeout: DEFAULT_TIMEOUT,
            quick_timeout: QUICK_TIMEOUT,
            max_files_per_batch: MAX_FILES_PER_BATCH,
            fatal_exit_threshold: 1,
            fatal_exit_overrides: HashMap::new(),
            preferred_linter: None,
            preferred_formatter: None,
            preferred_tester: None,
            extra_config: HashMap::new(),
        }
    }
}

impl LftConfig {
    /// Fatal exit threshold for one tool, honoring overrides.
    pub fn fatal_threshold_for(&self, tool: &str) -> i32 {
        self.fatal_exit_overrides
            .get(tool)
            .copied()
            .unwrap_or(self.fatal_exit_threshold)
    }

    // ==================== Builder Methods ====================

    pub fn with_formatter_style(mut self, style: FormatterStyle) -> Self {
        self.formatter_style = style;
        self
    }

    pub fn with_default_timeout(mut self, seconds: f64) -> Self {
        self.default_timeout = seconds;
        self
    }

    pub fn with_quick_timeout(mut self, seconds: f64) -> Self {
        self.quick_timeout = seconds;
        self
    }

    pub fn with_max_files_per_batch(mut self, max: usize) -> Self {
        self.max_files_per_batch = max;
        self
    }

    pub fn with_fatal_exit_threshold(mut self, threshold: i32) -> Self {
        self.fatal_exit_threshold = threshold;
        self
    }

    pub fn with_fatal_exit_override(mut self, tool: impl Into<String>, threshold: i32) -> Self {
        self.fatal_exit_overrides.insert(tool.into(), threshold);
        self
    }

    pub fn with_preferred_linter(mut self, tool: impl Into<String>) -> Self {
        self.preferred_linter = Some(tool.into());
        self
    }

    pub fn with_preferred_formatter(mut self, tool: impl Into<String>) -> Self {
        self.preferred_formatter = Some(tool.into());
        self
    }

    pub fn with_preferred_tester(mut self, tool: impl Into<String>) -> Self {
        self.preferred_tester = Some(tool.into());
        self
    }
}
