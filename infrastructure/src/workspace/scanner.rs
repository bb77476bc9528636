//! Filesystem workspace scanner
//!
//! Probes the workspace for every catalog config file, parses what it
//! finds, and discovers Python source files for tool runs. All failures
//! here are soft: unreadable or unparseable files are logged and skipped,
//! never propagated.

use super::excludes::is_excluded;
use super::parsers;
use lft_application::WorkspaceScanner;
use lft_domain::ConfigSnapshot;
use lft_domain::catalog::{CONFIG_CATALOG, DEFAULT_EXCLUDES};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Scanner backed by the real filesystem.
pub struct FsWorkspaceScanner {
    exclude_patterns: Vec<String>,
}

impl FsWorkspaceScanner {
    pub fn new() -> Self {
        Self {
            exclude_patterns: DEFAULT_EXCLUDES.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Replace the default exclusion patterns.
    pub fn with_exclude_patterns(mut self, patterns: Vec<String>) -> Self {
        self.exclude_patterns = patterns;
        self
    }

    fn discover_all(&self, dir: &Path) -> Vec<String> {
        let pattern = dir.join("**/*.py").to_string_lossy().into_owned();
        let paths = match glob::glob(&pattern) {
            Ok(paths) => paths,
            Err(err) => {
                warn!("Invalid discovery pattern {pattern}: {err}");
                return Vec::new();
            }
        };

        let mut files: Vec<String> = paths
            .filter_map(Result::ok)
            .filter_map(|path| {
                path.strip_prefix(dir)
                    .ok()
                    .map(|rel| rel.to_string_lossy().into_owned())
            })
            .filter(|rel| !is_excluded(rel, &self.exclude_patterns))
            .collect();
        files.sort();
        files
    }
}

impl Default for FsWorkspaceScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkspaceScanner for FsWorkspaceScanner {
    fn scan_configs(&self, dir: &Path) -> ConfigSnapshot {
        let mut snapshot = ConfigSnapshot::new();

        for entry in CONFIG_CATALOG {
            let path = dir.join(entry.name);
            if !path.is_file() {
                continue;
            }
            if entry.format.is_none() {
                debug!("Config file {} is presence-only, not parsed", entry.name);
                continue;
            }

            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    warn!("Failed to read {}: {err}", entry.name);
                    continue;
                }
            };

            match parsers::parse_config(entry, &content) {
                Some(data) if has_content(&data) => {
                    info!("Found config file: {}", entry.name);
                    snapshot.insert(entry.name, data);
                }
                Some(_) => debug!("Config file {} parsed to empty data", entry.name),
                None => warn!("Failed to parse {}", entry.name),
            }
        }

        snapshot
    }

    fn python_files(&self, dir: &Path, target: &str) -> Vec<String> {
        if target == "all" {
            return self.discover_all(dir);
        }
        if target.ends_with(".py") && dir.join(target).is_file() {
            return vec![target.to_string()];
        }
        Vec::new()
    }
}

/// Empty maps, empty lists, empty strings, zero and null all count as "no
/// data"; a file that parses to one of these is treated as absent.
fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
