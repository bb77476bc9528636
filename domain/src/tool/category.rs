//! Tool categories and their selection priorities.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Linter selection order, best first.
pub const LINTER_PRIORITY: &[&str] = &["ruff", "flake8", "pylint", "mypy", "pydocstyle", "bandit"];

/// Formatter selection order, best first.
pub const FORMATTER_PRIORITY: &[&str] = &["black", "ruff", "isort", "autopep8", "yapf"];

/// Test runner selection order, best first.
pub const TESTER_PRIORITY: &[&str] = &["pytest", "nose2", "unittest"];

/// The three kinds of tools the orchestrator manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    Linter,
    Formatter,
    Tester,
}

impl ToolCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Linter => "linter",
            ToolCategory::Formatter => "formatter",
            ToolCategory::Tester => "tester",
        }
    }

    /// Tool names in this category, in selection priority order.
    pub fn priority(&self) -> &'static [&'static str] {
        match self {
            ToolCategory::Linter => LINTER_PRIORITY,
            ToolCategory::Formatter => FORMATTER_PRIORITY,
            ToolCategory::Tester => TESTER_PRIORITY,
        }
    }

    /// Operation name used in reports when no concrete tool was selected.
    pub fn operation(&self) -> &'static str {
        match self {
            ToolCategory::Linter => "lint",
            ToolCategory::Formatter => "format",
            ToolCategory::Tester => "test",
        }
    }

    /// Human name used in error messages ("Requested linter ...").
    pub fn display_name(&self) -> &'static str {
        match self {
            ToolCategory::Linter => "linter",
            ToolCategory::Formatter => "formatter",
            ToolCategory::Tester => "test runner",
        }
    }

    /// Plural form for availability listings.
    pub fn display_name_plural(&self) -> &'static str {
        match self {
            ToolCategory::Linter => "linters",
            ToolCategory::Formatter => "formatters",
            ToolCategory::Tester => "test runners",
        }
    }

    /// Installation guidance shown when nothing in this category is configured.
    pub fn install_hint(&self) -> &'static str {
        match self {
            ToolCategory::Linter => "Install one of: ruff, flake8, pylint, mypy, bandit",
            ToolCategory::Formatter => "Install one of: black, ruff, isort, autopep8, yapf",
            ToolCategory::Tester => "Install one of: pytest, nose2, or use unittest",
        }
    }
}

impl fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
