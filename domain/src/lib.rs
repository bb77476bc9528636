//! Domain layer for python-lft
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Detection
//!
//! A workspace *configures* a tool when its config files reference it. The
//! [`detect`] module turns a parsed config snapshot into [`WorkspaceTools`],
//! one descriptor per known tool, in category priority order. No binary
//! lookup happens here.
//!
//! ## Classification
//!
//! Raw child-process output ([`CommandResult`]) is reduced to a
//! [`ToolReport`] with a success / warning / error status and per-tool
//! counts (files changed, tests run).

pub mod catalog;
pub mod config;
pub mod detect;
pub mod report;
pub mod run;
pub mod tool;

// Re-export commonly used types
pub use catalog::{
    CI_MATRIX_FILE, CONFIG_CATALOG, CatalogEntry, ConfigFormat, DEFAULT_EXCLUDES, HUB_FILES,
    catalog_entry,
};
pub use config::{FormatterStyle, ParseFormatterStyleError};
pub use detect::{ConfigSnapshot, detect_category, detect_tool};
pub use report::{
    ToolReport, ToolStatus,
    classify::{TestCounts, count_changed_files, parse_test_counts},
};
pub use run::{CommandResult, TIMEOUT_EXIT_CODE, combine};
pub use tool::{
    FORMATTER_PRIORITY, LINTER_PRIORITY, Recommended, TESTER_PRIORITY, ToolCategory,
    ToolDescriptor, WorkspaceTools,
};
