//! Detect Tools use case.
//!
//! Scans a workspace's configuration files and reports which linters,
//! formatters, and test runners it configures, without spawning anything.

use crate::ports::workspace_scanner::WorkspaceScanner;
use lft_domain::{CONFIG_CATALOG, ToolCategory, WorkspaceTools, detect_category};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Input for the [`DetectToolsUseCase`].
#[derive(Debug, Clone)]
pub struct DetectToolsInput {
    /// Workspace root to scan.
    pub work_dir: String,
}

impl DetectToolsInput {
    pub fn new(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }
}

impl Default for DetectToolsInput {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Use case for detecting the tools a workspace configures.
pub struct DetectToolsUseCase {
    scanner: Arc<dyn WorkspaceScanner>,
}

impl DetectToolsUseCase {
    pub fn new(scanner: Arc<dyn WorkspaceScanner>) -> Self {
        Self { scanner }
    }

    /// Scan config files and classify every known tool.
    ///
    /// A missing workspace directory simply yields an empty snapshot: every
    /// tool unavailable, every catalog file absent.
    pub fn execute(&self, input: DetectToolsInput) -> WorkspaceTools {
        let dir = Path::new(&input.work_dir);
        let snapshot = self.scanner.scan_configs(dir);
        info!(
            "Scanned {}: {} config files parsed",
            input.work_dir,
            snapshot.len()
        );

        let tools = WorkspaceTools {
            linters: detect_category(ToolCategory::Linter, &snapshot),
            formatters: detect_category(ToolCategory::Formatter, &snapshot),
            testers: detect_category(ToolCategory::Tester, &snapshot),
            config_files: CONFIG_CATALOG
                .iter()
                .map(|entry| (entry.name.to_string(), snapshot.contains(entry.name)))
                .collect(),
        };

        let recommended = tools.recommended();
        debug!(
            "Recommended tools: linter={:?} formatter={:?} tester={:?}",
            recommended.linter, recommended.formatter, recommended.tester
        );
        tools
    }
}
