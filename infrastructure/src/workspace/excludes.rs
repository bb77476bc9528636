//! Exclusion matching for Python file discovery
//!
//! Patterns come in three shapes, each with its own matching rule:
//!
//! | Pattern shape | Rule | Example |
//! |---|---|---|
//! | `dir/*` | literal leading segment | `venv/*` excludes `venv/lib/a.py` |
//! | contains `**` | full glob semantics | `**/__pycache__/**` |
//! | anything else | path-prefix match | `build` excludes `build/x.py` |

use glob::Pattern;

/// Check a relative path against one exclusion pattern.
fn matches_exclude(path: &str, pattern: &str) -> bool {
    // "dir/*" excludes everything under the named top-level directory,
    // never a file that merely contains the name ("src/venv.py" survives).
    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{prefix}/"));
    }

    // Recursive wildcards get real glob matching.
    if pattern.contains("**") {
        return Pattern::new(pattern)
            .map(|p| p.matches(path))
            .unwrap_or(false);
    }

    path.starts_with(pattern.trim_end_matches('/'))
}

/// Check a relative path against a set of exclusion patterns.
pub fn is_excluded(path: &str, patterns: &[String]) -> bool {
    patterns.iter().any(|p| matches_exclude(path, p))
}
