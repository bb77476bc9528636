//! Test runner command construction
//!
//! pytest and nose2 run as their own executables against the full default
//! timeout. unittest is driven through the Python interpreter: discovery
//! mode for "all", module mode for a single file (the path is converted to
//! a dotted module name).

use lft_application::{CommandSpec, RunContext};
use std::time::Duration;

/// The closed set of test runners this toolchain can drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TesterKind {
    Pytest,
    Nose2,
    Unittest,
}

impl TesterKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pytest" => Some(Self::Pytest),
            "nose2" => Some(Self::Nose2),
            "unittest" => Some(Self::Unittest),
            _ => None,
        }
    }

    /// Build the full test invocation for `target`.
    pub fn command(&self, tool_command: &str, target: &str, context: &RunContext) -> CommandSpec {
        let timeout = Duration::from_secs_f64(context.default_timeout);
        match self {
            Self::Pytest => {
                let mut spec = CommandSpec::new(tool_command, context.work_dir.as_str(), timeout)
                    .args(["--maxfail=1", "--disable-warnings"])
                    .args(context.custom_args.iter().cloned());
                if target != "all" {
                    spec = spec.arg(target);
                }
                spec
            }
            Self::Nose2 => {
                let mut spec = CommandSpec::new(tool_command, context.work_dir.as_str(), timeout)
                    .args(context.custom_args.iter().cloned());
                if target != "all" {
                    spec = spec.arg(target);
                }
                spec
            }
            Self::Unittest => {
                let spec =
                    CommandSpec::new(python_interpreter(), context.work_dir.as_str(), timeout)
                        .args(["-m", "unittest"]);
                let spec = if target == "all" {
                    spec.args(["discover", "-s", ".", "-p", "*test*.py"])
                } else if let Some(stem) = target.strip_suffix(".py") {
                    spec.arg(stem.replace('/', "."))
                } else {
                    spec.arg(target)
                };
                spec.args(context.custom_args.iter().cloned())
            }
        }
    }
}

/// unittest has no executable of its own; prefer python3 on PATH.
fn python_interpreter() -> String {
    for candidate in ["python3", "python"] {
        if which::which(candidate).is_ok() {
            return candidate.to_string();
        }
    }
    "python3".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> RunContext {
        RunContext::new(".")
    }

    #[test]
    fn test_from_name_covers_registered_testers() {
        assert_eq!(TesterKind::from_name("pytest"), Some(TesterKind::Pytest));
        assert_eq!(TesterKind::from_name("unittest"), Some(TesterKind::Unittest));
        assert_eq!(TesterKind::from_name("tox"), None);
    }

    #[test]
    fn test_pytest_all_omits_target() {
        let spec = TesterKind::Pytest.command("pytest", "all", &context());
        assert_eq!(spec.program, "pytest");
        assert_eq!(spec.args, vec!["--maxfail=1", "--disable-warnings"]);
    }

    #[test]
    fn test_pytest_single_target_appended() {
        let spec = TesterKind::Pytest.command("pytest", "tests/test_api.py", &context());
        assert_eq!(
            spec.args,
            vec!["--maxfail=1", "--disable-warnings", "tests/test_api.py"]
        );
    }

    #[test]
    fn test_nose2_is_bare_invocation() {
        let spec = TesterKind::Nose2.command("nose2", "all", &context());
        assert!(spec.args.is_empty());
    }

    #[test]
    fn test_unittest_all_uses_discovery() {
        let spec = TesterKind::Unittest.command("unittest", "all", &context());
        assert_eq!(
            spec.args,
            vec!["-m", "unittest", "discover", "-s", ".", "-p", "*test*.py"]
        );
    }

    #[test]
    fn test_unittest_converts_file_path_to_module() {
        let spec = TesterKind::Unittest.command("unittest", "tests/test_api.py", &context());
        assert_eq!(spec.args, vec!["-m", "unittest", "tests.test_api"]);
    }

    #[test]
    fn test_unittest_passes_module_name_through() {
        let spec = TesterKind::Unittest.command("unittest", "tests.test_api", &context());
        assert_eq!(spec.args, vec!["-m", "unittest", "tests.test_api"]);
    }

    #[test]
    fn test_tester_timeout_uses_default() {
        let ctx = context();
        let spec = TesterKind::Pytest.command("pytest", "all", &ctx);
        assert_eq!(spec.timeout, Duration::from_secs_f64(ctx.default_timeout));
    }

    #[test]
    fn test_custom_args_before_target() {
        let mut ctx = context();
        ctx.custom_args = vec!["-k".to_string(), "smoke".to_string()];
        let spec = TesterKind::Pytest.command("pytest", "tests/test_api.py", &ctx);
        assert_eq!(
            spec.args,
            vec![
                "--maxfail=1",
                "--disable-warnings",
                "-k",
                "smoke",
                "tests/test_api.py"
            ]
        );
    }
}
