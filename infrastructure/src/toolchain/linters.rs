//! Linter command construction
//!
//! | Tool | Argv shape | Timeout |
//! |---|---|---|
//! | ruff | `ruff check <files>` | quick |
//! | flake8 | `flake8 <files>` | quick |
//! | pylint | `pylint <files>` | quick x2 |
//! | mypy | `mypy <files>` | quick x2 |
//! | bandit | `bandit [-c <cfg>] -r .` | quick |
//!
//! pylint and mypy analyze whole programs, so they get double the quick
//! timeout. bandit scans the workspace recursively and ignores the file
//! list, picking up the first bandit config file present.

use lft_application::{CommandSpec, RunContext};
use std::path::Path;
use std::time::Duration;

const BANDIT_CONFIG_FILES: &[&str] = &[
    ".bandit",
    "bandit.yaml",
    "bandit.yml",
    ".bandit.yaml",
    ".bandit.yml",
];

/// The closed set of linters this toolchain can drive.
///
/// pydocstyle is detectable but has no runner registered here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinterKind {
    Ruff,
    Flake8,
    Pylint,
    Mypy,
    Bandit,
}

impl LinterKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ruff" => Some(Self::Ruff),
            "flake8" => Some(Self::Flake8),
            "pylint" => Some(Self::Pylint),
            "mypy" => Some(Self::Mypy),
            "bandit" => Some(Self::Bandit),
            _ => None,
        }
    }

    pub fn timeout(&self, context: &RunContext) -> Duration {
        let secs = match self {
            Self::Pylint | Self::Mypy => context.quick_timeout * 2.0,
            _ => context.quick_timeout,
        };
        Duration::from_secs_f64(secs)
    }

    /// True when the tool scans from the workspace root instead of taking
    /// a file list. Such runs are never chunked.
    pub fn scans_recursively(&self) -> bool {
        matches!(self, Self::Bandit)
    }

    /// Build the invocation without its file list. Callers append files
    /// directly or hand the spec to chunked execution.
    pub fn command(&self, tool_command: &str, context: &RunContext) -> CommandSpec {
        let spec = CommandSpec::new(tool_command, context.work_dir.as_str(), self.timeout(context));
        match self {
            Self::Ruff => spec
                .arg("check")
                .args(context.custom_args.iter().cloned()),
            Self::Bandit => spec
                .args(bandit_config_args(Path::new(&context.work_dir)))
                .args(context.custom_args.iter().cloned())
                .args(["-r", "."]),
            _ => spec.args(context.custom_args.iter().cloned()),
        }
    }
}

/// `-c <file>` for the first bandit config present in the workspace.
fn bandit_config_args(work_dir: &Path) -> Vec<String> {
    for name in BANDIT_CONFIG_FILES {
        if work_dir.join(name).is_file() {
            return vec!["-c".to_string(), name.to_string()];
        }
    }
    Vec::new()
}
