//! Formatter command construction
//!
//! | Tool | Argv shape |
//! |---|---|
//! | black | `black --line-length <n> <files>` |
//! | ruff | `ruff format --line-length <n> <files>` |
//! | isort | `isort --line-length <n> <files>` |
//! | autopep8 | `autopep8 --in-place --max-line-length <n> <files>` |
//! | yapf | `yapf --in-place --style={column_limit: <n>} <files>` |
//!
//! All formatters rewrite files in place and run under the quick timeout.
//! File lists are never chunked; formatters handle long argument lists
//! themselves.

use lft_application::{CommandSpec, RunContext};
use std::time::Duration;

/// The closed set of formatters this toolchain can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatterKind {
    Black,
    Ruff,
    Isort,
    Autopep8,
    Yapf,
}

impl FormatterKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "black" => Some(Self::Black),
            "ruff" => Some(Self::Ruff),
            "isort" => Some(Self::Isort),
            "autopep8" => Some(Self::Autopep8),
            "yapf" => Some(Self::Yapf),
            _ => None,
        }
    }

    /// Build the invocation without its file list.
    pub fn command(
        &self,
        tool_command: &str,
        line_length: usize,
        context: &RunContext,
    ) -> CommandSpec {
        let timeout = Duration::from_secs_f64(context.quick_timeout);
        let spec = CommandSpec::new(tool_command, context.work_dir.as_str(), timeout);
        let spec = match self {
            Self::Black => spec.args(["--line-length".to_string(), line_length.to_string()]),
            Self::Ruff => spec
                .arg("format")
                .args(["--line-length".to_string(), line_length.to_string()]),
            Self::Isort => spec.args(["--line-length".to_string(), line_length.to_string()]),
            Self::Autopep8 => spec.arg("--in-place").args([
                "--max-line-length".to_string(),
                line_length.to_string(),
            ]),
            Self::Yapf => spec
                .arg("--in-place")
                .arg(format!("--style={{column_limit: {line_length}}}")),
        };
        spec.args(context.custom_args.iter().cloned())
    }
}
