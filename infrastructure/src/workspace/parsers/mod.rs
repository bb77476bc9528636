//! Config-file parsing, dispatched by catalog format
//!
//! Each known format maps to one parse function in the [`PARSERS`] registry.
//! Parsers are total over their input in one sense: a failure to parse
//! yields `None` ("no data"), never an error. The scanner drops `None` and
//! keeps going, so one corrupt file cannot abort detection.

mod ini;
mod python_source;

use lft_domain::catalog::{CatalogEntry, ConfigFormat};
use serde_json::{Value, json};

/// A parse function: (catalog name, file content) to parsed data.
pub type ParserFn = fn(&str, &str) -> Option<Value>;

/// Format dispatch table. Adding a format means adding one row here.
pub const PARSERS: &[(ConfigFormat, ParserFn)] = &[
    (ConfigFormat::Toml, parse_toml),
    (ConfigFormat::Yaml, parse_yaml),
    (ConfigFormat::Json, parse_json),
    (ConfigFormat::Ini, parse_ini),
    (ConfigFormat::PythonSource, parse_python_source),
    (ConfigFormat::Requirements, parse_requirements),
    (ConfigFormat::PlainText, parse_plain_text),
    (ConfigFormat::Pipfile, parse_pipfile),
];

/// Parse file content according to its catalog entry.
///
/// Presence-only entries (no format) and unparseable content both yield
/// `None`.
pub fn parse_config(entry: &CatalogEntry, content: &str) -> Option<Value> {
    let format = entry.format?;
    let parser = PARSERS
        .iter()
        .find(|(candidate, _)| *candidate == format)
        .map(|(_, parser)| *parser)?;
    parser(entry.name, content)
}

fn parse_toml(_name: &str, content: &str) -> Option<Value> {
    let value: toml::Value = toml::from_str(content).ok()?;
    serde_json::to_value(value).ok()
}

fn parse_yaml(_name: &str, content: &str) -> Option<Value> {
    serde_yaml::from_str(content).ok()
}

fn parse_json(_name: &str, content: &str) -> Option<Value> {
    serde_json::from_str(content).ok()
}

fn parse_ini(_name: &str, content: &str) -> Option<Value> {
    ini::parse(content)
}

fn parse_python_source(_name: &str, content: &str) -> Option<Value> {
    python_source::parse(content)
}

fn parse_requirements(_name: &str, content: &str) -> Option<Value> {
    // The comment filter looks at the raw line, so indented "#" lines
    // survive as content.
    let lines: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(|line| line.trim().to_string())
        .collect();
    Some(json!({
        "requirements": lines,
        "count": lines.len(),
        "file_type": "requirements",
    }))
}

fn parse_plain_text(name: &str, content: &str) -> Option<Value> {
    let filename = name.rsplit('/').next().unwrap_or(name);
    Some(json!({
        "file_type": "text_config",
        "line_count": content.lines().count(),
        "content_length": content.len(),
        "filename": filename,
    }))
}

fn parse_pipfile(_name: &str, content: &str) -> Option<Value> {
    Some(json!({ "pipfile_content": content }))
}
