//! INI/CFG parsing for section-style config files
//!
//! Covers setup.cfg, tox.ini, .flake8 and friends. The dialect follows the
//! common Python conventions: `[section]` headers, `=` or `:` delimiters,
//! `#`/`;` comment lines, indented continuation lines appended to the
//! previous value, option keys lowercased, section names kept as written.
//! Any malformed line fails the whole file; callers treat that as "no data"
//! and move on.

use serde_json::{Map, Value};

/// Parse INI-style content into a map of section name to key/value object.
///
/// Returns `None` on any structural error: a key/value pair before the first
/// section header, a line that is neither header, pair, comment nor
/// continuation, or a duplicated section or key.
pub fn parse(content: &str) -> Option<Value> {
    let mut sections: Map<String, Value> = Map::new();
    let mut current: Option<(String, Map<String, Value>)> = None;
    let mut last_key: Option<String> = None;

    for raw in content.lines() {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        // Indented lines continue the previous value.
        if raw.starts_with([' ', '\t']) {
            let (_, values) = current.as_mut()?;
            let key = last_key.as_ref()?;
            if let Some(Value::String(existing)) = values.get_mut(key) {
                existing.push('\n');
                existing.push_str(trimmed);
            }
            continue;
        }

        if let Some(header) = parse_section_header(trimmed) {
            let reopened = sections.contains_key(&header)
                || current.as_ref().is_some_and(|(name, _)| *name == header);
            if reopened {
                return None;
            }
            flush(&mut sections, current.take());
            current = Some((header, Map::new()));
            last_key = None;
            continue;
        }

        let (key, value) = parse_key_value(trimmed)?;
        let (_, values) = current.as_mut()?;
        if values.contains_key(&key) {
            return None;
        }
        values.insert(key.clone(), Value::String(value));
        last_key = Some(key);
    }

    flush(&mut sections, current);
    Some(Value::Object(sections))
}

fn flush(sections: &mut Map<String, Value>, current: Option<(String, Map<String, Value>)>) {
    if let Some((name, values)) = current {
        // DEFAULT is an interpolation source, not a real section.
        if name != "DEFAULT" {
            sections.insert(name, Value::Object(values));
        }
    }
}

fn parse_section_header(line: &str) -> Option<String> {
    let inner = line.strip_prefix('[')?.strip_suffix(']')?;
    let name = inner.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Split a `key = value` or `key: value` line. Keys are lowercased.
fn parse_key_value(line: &str) -> Option<(String, String)> {
    let delim = line.find(['=', ':'])?;
    let key = line[..delim].trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    let value = line[delim + 1..].trim().to_string();
    Some((key, value))
}
