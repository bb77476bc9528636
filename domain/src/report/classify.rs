//! Tool-specific output classification.
//!
//! Formatters and test runners report what they did only through free text,
//! so the counts here come from per-tool heuristics over combined output.
//! Output that matches no known pattern yields zero counts.

use regex::Regex;
use std::sync::LazyLock;

static PYTEST_PASSED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s+passed").unwrap());
static PYTEST_FAILED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\d+)\s+failed").unwrap());
static RAN_TESTS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"Ran\s+(\d+)\s+test[s]?").unwrap());
static UNITTEST_FAILURES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"failures=(\d+)").unwrap());
static UNITTEST_ERRORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"errors=(\d+)").unwrap());

/// Number of files a formatter changed, judged from its output.
///
/// black announces each change with "reformatted"; ruff prints one line per
/// rewritten file plus "Found"/"Formatting" summary lines; isort says
/// "Fixing"/"fixed". Unknown formatters count 1 when they printed anything.
pub fn count_changed_files(tool_name: &str, output: &str) -> usize {
    if output.is_empty() {
        return 0;
    }
    match tool_name {
        "black" => output.to_lowercase().matches("reformatted").count(),
        "ruff" => output
            .lines()
            .filter(|line| {
                !line.trim().is_empty()
                    && !line.starts_with("Found")
                    && !line.starts_with("Formatting")
            })
            .count(),
        "isort" => {
            let lower = output.to_lowercase();
            lower.matches("fixing").count() + lower.matches("fixed").count()
        }
        _ => 1,
    }
}

/// Test totals extracted from runner output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestCounts {
    pub run: usize,
    pub passed: usize,
    pub failed: usize,
}

/// Extract test counts from runner output.
///
/// pytest summaries look like "3 passed, 1 failed in 0.12s"; nose2 and
/// unittest print "Ran N tests" with "FAILED (failures=X, errors=Y)" on
/// failure. Passed is derived as run minus failed for the unittest family.
pub fn parse_test_counts(tool_name: &str, output: &str) -> TestCounts {
    let mut counts = TestCounts::default();
    match tool_name {
        "pytest" => {
            if let Some(caps) = PYTEST_PASSED.captures(output) {
                counts.passed = caps[1].parse().unwrap_or(0);
                counts.run += counts.passed;
            }
            if let Some(caps) = PYTEST_FAILED.captures(output) {
                counts.failed = caps[1].parse().unwrap_or(0);
                counts.run += counts.failed;
            }
        }
        "nose2" | "unittest" => {
            if let Some(caps) = RAN_TESTS.captures(output) {
                counts.run = caps[1].parse().unwrap_or(0);
            }
            if output.contains("FAILED") {
                let failures = capture_count(&UNITTEST_FAILURES, output);
                let errors = capture_count(&UNITTEST_ERRORS, output);
                counts.failed = failures + errors;
            }
            counts.passed = counts.run.saturating_sub(counts.failed);
        }
        _ => {}
    }
    counts
}

fn capture_count(pattern: &Regex, output: &str) -> usize {
    pattern
        .captures(output)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(0)
}
