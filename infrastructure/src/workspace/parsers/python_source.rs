//! Best-effort extraction of metadata from Python config scripts
//!
//! setup.py and conf.py are code, not data, so this never executes them.
//! It scans for literal `param = "value"` assignments inside files that
//! contain a `setup(` call and falls back to a small descriptive record
//! when nothing can be extracted.

use regex::Regex;
use serde_json::{Map, Value, json};
use std::sync::LazyLock;

const SETUP_PARAMS: &[&str] = &["name", "version", "description", "author", "python_requires"];

static PARAM_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    SETUP_PARAMS
        .iter()
        .map(|param| {
            let pattern = format!(r#"{param}\s*=\s*["']([^"']+)["']"#);
            (*param, Regex::new(&pattern).unwrap())
        })
        .collect()
});

static INSTALL_REQUIRES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)install_requires\s*=\s*\[(.*?)\]").unwrap());

/// Scan Python source for setup() metadata.
///
/// Always yields a value: extracted parameters when a `setup(` call with
/// literal assignments is present, otherwise a `python_file` marker record.
pub fn parse(content: &str) -> Option<Value> {
    let mut config = Map::new();

    if content.contains("setup(") {
        for (param, pattern) in PARAM_PATTERNS.iter() {
            if let Some(caps) = pattern.captures(content) {
                config.insert(param.to_string(), Value::String(caps[1].to_string()));
            }
        }

        if let Some(caps) = INSTALL_REQUIRES.captures(content) {
            let requires: Vec<Value> = caps[1]
                .split(',')
                .filter(|req| !req.trim().is_empty())
                .map(|req| Value::String(req.trim().trim_matches(['"', '\'']).to_string()))
                .collect();
            config.insert("install_requires".to_string(), Value::Array(requires));
        }
    }

    if config.is_empty() {
        return Some(json!({
            "python_file": true,
            "content_length": content.len(),
        }));
    }
    Some(Value::Object(config))
}
