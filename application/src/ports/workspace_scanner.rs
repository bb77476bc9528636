//! Workspace scanning port.

use lft_domain::ConfigSnapshot;
use std::path::Path;

/// Reads workspace configuration and source layout.
///
/// Scanning is plain filesystem work and stays synchronous; tool runs are
/// the slow part of any operation.
pub trait WorkspaceScanner: Send + Sync {
    /// Parse every catalog config file present under `dir`.
    ///
    /// Files that are missing, unreadable, or fail to parse are skipped;
    /// the snapshot only ever holds successfully parsed entries.
    fn scan_configs(&self, dir: &Path) -> ConfigSnapshot;

    /// Python files to hand to a tool, relative to `dir`.
    ///
    /// `target` is either the literal `"all"` (recursive discovery honoring
    /// the default exclude patterns, sorted) or a single `.py` path. A
    /// target that does not exist or is not a `.py` file yields an empty
    /// list.
    fn python_files(&self, dir: &Path, target: &str) -> Vec<String>;

    /// True when `dir` exists and is a directory.
    fn workspace_exists(&self, dir: &Path) -> bool {
        dir.is_dir()
    }
}
