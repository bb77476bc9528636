//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

use lft_application::{DEFAULT_TIMEOUT, LftConfig, MAX_FILES_PER_BATCH, QUICK_TIMEOUT};
use lft_domain::FormatterStyle;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("default_timeout must be positive")]
    InvalidDefaultTimeout,

    #[error("quick_timeout must be positive")]
    InvalidQuickTimeout,

    #[error("max_files_per_batch cannot be 0")]
    InvalidBatchSize,

    #[error("fatal_exit_threshold cannot be negative")]
    InvalidFatalThreshold,
}

/// Raw execution configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Timeout for test runs, in seconds
    pub default_timeout: f64,
    /// Timeout for lint and format runs, in seconds
    pub quick_timeout: f64,
    /// File-list length above which lint runs are chunked
    pub max_files_per_batch: usize,
    /// Largest exit code still read as "issues found" in chunked runs
    pub fatal_exit_threshold: i32,
    /// Per-tool overrides for the fatal exit threshold
    #[serde(default)]
    pub fatal_exit_overrides: HashMap<String, i32>,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        Self {
            default_timeout: DEFAULT_TIMEOUT,
            quick_timeout: QUICK_TIMEOUT,
            max_files_per_batch: MAX_FILES_PER_BATCH,
            fatal_exit_threshold: 1,
            fatal_exit_overrides: HashMap::new(),
        }
    }
}

/// Raw tool preference configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileToolsConfig {
    /// Linter used when the caller does not name one
    pub linter: Option<String>,
    /// Formatter used when the caller does not name one
    pub formatter: Option<String>,
    /// Test runner used when the caller does not name one
    pub tester: Option<String>,
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Report rendering style (uses domain type)
    pub style: FormatterStyle,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            style: FormatterStyle::Standard,
            color: true,
        }
    }
}

/// Raw workspace configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileWorkspaceConfig {
    /// Replacement for the built-in exclusion patterns
    pub exclude_patterns: Option<Vec<String>>,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Execution settings
    pub execution: FileExecutionConfig,
    /// Tool preferences
    pub tools: FileToolsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Workspace scanning settings
    pub workspace: FileWorkspaceConfig,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.execution.default_timeout <= 0.0 {
            return Err(ConfigValidationError::InvalidDefaultTimeout);
        }
        if self.execution.quick_timeout <= 0.0 {
            return Err(ConfigValidationError::InvalidQuickTimeout);
        }
        if self.execution.max_files_per_batch == 0 {
            return Err(ConfigValidationError::InvalidBatchSize);
        }
        if self.execution.fatal_exit_threshold < 0 {
            return Err(ConfigValidationError::InvalidFatalThreshold);
        }
        Ok(())
    }

    /// Convert the raw file structure into orchestrator settings.
    pub fn into_lft_config(self) -> LftConfig {
        let mut config = LftConfig::default()
            .with_formatter_style(self.output.style)
            .with_default_timeout(self.execution.default_timeout)
            .with_quick_timeout(self.execution.quick_timeout)
            .with_max_files_per_batch(self.execution.max_files_per_batch)
            .with_fatal_exit_threshold(self.execution.fatal_exit_threshold);
        config.fatal_exit_overrides = self.execution.fatal_exit_overrides;
        config.preferred_linter = self.tools.linter;
        config.preferred_formatter = self.tools.formatter;
        config.preferred_tester = self.tools.tester;
        config
    }
}
