//! Check Configs use case.
//!
//! Answers "which catalog config files does this workspace have?" as a
//! filename-to-presence map. A file counts as present only when it exists
//! *and* parsed; unreadable or malformed files report false.

use crate::ports::workspace_scanner::WorkspaceScanner;
use lft_domain::CONFIG_CATALOG;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Input for the [`CheckConfigsUseCase`].
#[derive(Debug, Clone)]
pub struct CheckConfigsInput {
    pub work_dir: String,
}

impl CheckConfigsInput {
    pub fn new(work_dir: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
        }
    }
}

impl Default for CheckConfigsInput {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Use case for probing catalog config file presence.
pub struct CheckConfigsUseCase {
    scanner: Arc<dyn WorkspaceScanner>,
}

impl CheckConfigsUseCase {
    pub fn new(scanner: Arc<dyn WorkspaceScanner>) -> Self {
        Self { scanner }
    }

    pub fn execute(&self, input: CheckConfigsInput) -> BTreeMap<String, bool> {
        let snapshot = self.scanner.scan_configs(Path::new(&input.work_dir));
        CONFIG_CATALOG
            .iter()
            .map(|entry| (entry.name.to_string(), snapshot.contains(entry.name)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lft_domain::ConfigSnapshot;
    use serde_json::json;

    struct FixedScanner {
        snapshot: ConfigSnapshot,
    }

    impl WorkspaceScanner for FixedScanner {
        fn scan_configs(&self, _dir: &Path) -> ConfigSnapshot {
            self.snapshot.clone()
        }

        fn python_files(&self, _dir: &Path, _target: &str) -> Vec<String> {
            Vec::new()
        }
    }

    #[test]
    fn test_presence_map_covers_whole_catalog() {
        let mut snapshot = ConfigSnapshot::new();
        snapshot.insert("setup.cfg", json!({"metadata": {"name": "pkg"}}));

        let use_case = CheckConfigsUseCase::new(Arc::new(FixedScanner { snapshot }));
        let presence = use_case.execute(CheckConfigsInput::default());

        assert_eq!(presence.len(), CONFIG_CATALOG.len());
        assert_eq!(presence.get("setup.cfg"), Some(&true));
        assert_eq!(presence.get("pyproject.toml"), Some(&false));
    }
}
