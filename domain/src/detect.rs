//! Pure tool detection over parsed configuration data.
//!
//! Detection takes a [`ConfigSnapshot`] (filename to parsed value, produced
//! by the workspace scanner) and answers which tools the workspace
//! configures. Two signals make a tool available:
//!
//! 1. a config file whose *name* contains the tool name, or a hub file
//!    (pyproject.toml, setup.cfg) whose *content* mentions it
//! 2. extractable settings: `[tool.<name>]` in pyproject.toml, matching
//!    sections in setup.cfg or tox.ini, or any name-matching file's content

use crate::catalog::{CI_MATRIX_FILE, HUB_FILES};
use crate::tool::{ToolCategory, ToolDescriptor};
use serde_json::{Map, Value};

/// Parsed configuration files, keyed by catalog filename.
///
/// Insertion order is preserved so later files overwrite earlier ones when
/// settings are merged, mirroring catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigSnapshot {
    entries: Vec<(String, Value)>,
}

impl ConfigSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.entries.push((name.into(), value));
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Value)> for ConfigSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Detect every tool in a category's priority list, preserving priority order.
pub fn detect_category(category: ToolCategory, configs: &ConfigSnapshot) -> Vec<ToolDescriptor> {
    category
        .priority()
        .iter()
        .map(|name| detect_tool(name, configs))
        .collect()
}

/// Build the descriptor for one tool from the parsed config set.
pub fn detect_tool(tool_name: &str, configs: &ConfigSnapshot) -> ToolDescriptor {
    let config_files = matching_config_files(tool_name, configs);
    let config_data = extract_tool_settings(tool_name, configs);
    ToolDescriptor::detected(tool_name, config_files, config_data)
}

fn matching_config_files(tool_name: &str, configs: &ConfigSnapshot) -> Vec<String> {
    let mut matches = Vec::new();
    for (file, value) in configs.iter() {
        if file.to_lowercase().contains(tool_name) {
            matches.push(file.to_string());
        } else if HUB_FILES.contains(&file) && value.to_string().to_lowercase().contains(tool_name)
        {
            matches.push(file.to_string());
        }
    }
    matches
}

/// Merge settings for one tool from every source that names it.
///
/// Merge order (later wins on key conflicts): pyproject.toml `[tool.<name>]`,
/// setup.cfg sections, tox.ini sections, then whole name-matching files.
fn extract_tool_settings(tool_name: &str, configs: &ConfigSnapshot) -> Option<Map<String, Value>> {
    let mut merged = Map::new();

    if let Some(section) = configs
        .get("pyproject.toml")
        .and_then(|v| v.get("tool"))
        .and_then(|tool| tool.get(tool_name))
        .and_then(Value::as_object)
    {
        merge_into(&mut merged, section);
    }

    for hub in ["setup.cfg", CI_MATRIX_FILE] {
        if let Some(sections) = configs.get(hub).and_then(Value::as_object) {
            for (section_name, section) in sections {
                if section_name.to_lowercase().contains(tool_name) {
                    if let Some(section) = section.as_object() {
                        merge_into(&mut merged, section);
                    }
                }
            }
        }
    }

    for (file, value) in configs.iter() {
        if file.to_lowercase().contains(tool_name) {
            if let Some(map) = value.as_object() {
                merge_into(&mut merged, map);
            }
        }
    }

    if merged.is_empty() { None } else { Some(merged) }
}

fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
    for (key, value) in source {
        target.insert(key.clone(), value.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot(entries: &[(&str, Value)]) -> ConfigSnapshot {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn test_tool_sections_drive_availability() {
        let configs = snapshot(&[(
            "pyproject.toml",
            json!({"tool": {"flake8": {"max-line-length": 100},
                            "black": {"line-length": 100},
                            "pytest": {"ini_options": {"testpaths": ["tests"]}}}}),
        )]);

        let linters = detect_category(ToolCategory::Linter, &configs);
        let available: Vec<_> = linters.iter().filter(|t| t.available).map(|t| t.name.as_str()).collect();
        assert_eq!(available, vec!["flake8"]);

        let formatters = detect_category(ToolCategory::Formatter, &configs);
        let available: Vec<_> = formatters.iter().filter(|t| t.available).map(|t| t.name.as_str()).collect();
        assert_eq!(available, vec!["black"]);

        let testers = detect_category(ToolCategory::Tester, &configs);
        let available: Vec<_> = testers.iter().filter(|t| t.available).map(|t| t.name.as_str()).collect();
        assert_eq!(available, vec!["pytest"]);
    }

    #[test]
    fn test_category_vectors_keep_priority_order_for_unavailable_tools() {
        let linters = detect_category(ToolCategory::Linter, &ConfigSnapshot::new());
        let names: Vec<_> = linters.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["ruff", "flake8", "pylint", "mypy", "pydocstyle", "bandit"]);
        assert!(linters.iter().all(|t| !t.available));
    }

    #[test]
    fn test_filename_substring_matches_tool() {
        let configs = snapshot(&[(".flake8", json!({"flake8": {"max-line-length": "88"}}))]);
        let tool = detect_tool("flake8", &configs);
        assert!(tool.available);
        assert_eq!(tool.config_files, vec![".flake8"]);
    }

    #[test]
    fn test_hub_content_mention_matches_tool() {
        // pytest appears only inside pyproject content, not in any filename.
        let configs = snapshot(&[(
            "pyproject.toml",
            json!({"project": {"optional-dependencies": {"dev": ["pytest>=8"]}}}),
        )]);
        let tool = detect_tool("pytest", &configs);
        assert_eq!(tool.config_files, vec!["pyproject.toml"]);
        assert!(tool.available);
        // Content matching applies to hub files only.
        let configs = snapshot(&[("mkdocs.yml", json!({"plugins": ["pytest-ish"]}))]);
        assert!(!detect_tool("pytest", &configs).available);
    }

    #[test]
    fn test_settings_merge_later_sources_overwrite() {
        let configs = snapshot(&[
            ("pyproject.toml", json!({"tool": {"ruff": {"line-length": 88, "target-version": "py311"}}})),
            ("ruff.toml", json!({"line-length": 100})),
        ]);
        let tool = detect_tool("ruff", &configs);
        let data = tool.config_data.unwrap();
        assert_eq!(data["line-length"], json!(100));
        assert_eq!(data["target-version"], json!("py311"));
    }

    #[test]
    fn test_setup_cfg_sections_match_by_name() {
        let configs = snapshot(&[(
            "setup.cfg",
            json!({"flake8": {"max-line-length": "100"}, "metadata": {"name": "pkg"}}),
        )]);
        let tool = detect_tool("flake8", &configs);
        let data = tool.config_data.unwrap();
        assert_eq!(data["max-line-length"], json!("100"));
        assert!(!data.contains_key("name"));
    }

    #[test]
    fn test_tox_ini_testenv_sections_match_pytest() {
        let configs = snapshot(&[(
            "tox.ini",
            json!({"tox": {"envlist": "py311"}, "pytest": {"addopts": "-q"}}),
        )]);
        let tool = detect_tool("pytest", &configs);
        assert_eq!(tool.config_data.unwrap()["addopts"], json!("-q"));
    }

    #[test]
    fn test_non_object_sections_are_skipped() {
        let configs = snapshot(&[
            ("pyproject.toml", json!({"tool": {"ruff": "not a table"}})),
            ("Pipfile", json!({"pipfile_content": "ruff = \"*\""})),
        ]);
        // No extractable settings, but Pipfile's name does not mention ruff
        // and pyproject content does, so the hub match still applies.
        let tool = detect_tool("ruff", &configs);
        assert_eq!(tool.config_files, vec!["pyproject.toml"]);
        assert!(tool.config_data.is_none());
    }

    #[test]
    fn test_empty_snapshot_detects_nothing() {
        let tool = detect_tool("ruff", &ConfigSnapshot::new());
        assert!(!tool.available);
        assert!(tool.config_files.is_empty());
        assert!(tool.config_data.is_none());
    }
}
