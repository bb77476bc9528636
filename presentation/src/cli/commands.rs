//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use lft_domain::FormatterStyle;
use std::path::PathBuf;

/// Output mode for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Multi-line report with raw tool output
    Standard,
    /// One-line summaries
    Compact,
    /// JSON output
    Json,
}

impl OutputMode {
    /// Text style backing this mode, if it is a text mode.
    pub fn style(&self) -> Option<FormatterStyle> {
        match self {
            OutputMode::Standard => Some(FormatterStyle::Standard),
            OutputMode::Compact => Some(FormatterStyle::Compact),
            OutputMode::Json => None,
        }
    }
}

impl From<FormatterStyle> for OutputMode {
    fn from(style: FormatterStyle) -> Self {
        match style {
            FormatterStyle::Standard => OutputMode::Standard,
            FormatterStyle::Compact => OutputMode::Compact,
        }
    }
}

/// CLI arguments for python-lft
#[derive(Parser, Debug)]
#[command(name = "python-lft")]
#[command(author, version, about = "Detect and run Python lint, format, and test tools")]
#[command(long_about = r#"
python-lft inspects a Python workspace's configuration files to discover
which linters, formatters, and test runners it configures, then runs the
best configured tool for each job and summarizes the outcome.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./lft.toml          Project-level config (or ./.lft.toml)
3. ~/.config/python-lft/config.toml   Global config

Example:
  python-lft detect
  python-lft lint --tool ruff
  python-lft format --line-length 100 --target src/app.py
  python-lft test --output json
  python-lft lint -- --select E501
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace directory to operate on
    #[arg(short, long, value_name = "DIR", default_value = ".", global = true)]
    pub work_dir: String,

    /// Output mode (defaults to the configured style)
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputMode>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Write logs to daily-rotated files in this directory instead of stderr
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
}

/// Operations the orchestrator can run
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show which tools the workspace configures
    Detect,
    /// Run the best configured linter
    Lint {
        /// Specific linter to run instead of the best available
        #[arg(short, long, value_name = "NAME")]
        tool: Option<String>,

        /// Files or directories to lint ("all" for the whole workspace)
        #[arg(long, default_value = "all")]
        target: String,

        /// Extra arguments passed through to the tool
        #[arg(last = true, value_name = "ARGS")]
        extra_args: Vec<String>,
    },
    /// Run the best configured formatter
    Format {
        /// Specific formatter to run instead of the best available
        #[arg(short, long, value_name = "NAME")]
        tool: Option<String>,

        /// Files or directories to format ("all" for the whole workspace)
        #[arg(long, default_value = "all")]
        target: String,

        /// Maximum line length passed to the formatter
        #[arg(short, long, value_name = "N")]
        line_length: Option<usize>,

        /// Extra arguments passed through to the tool
        #[arg(last = true, value_name = "ARGS")]
        extra_args: Vec<String>,
    },
    /// Run the best configured test runner
    Test {
        /// Specific test runner to run instead of the best available
        #[arg(short, long, value_name = "NAME")]
        tool: Option<String>,

        /// Test file or directory ("all" for the whole suite)
        #[arg(long, default_value = "all")]
        target: String,

        /// Extra arguments passed through to the runner
        #[arg(last = true, value_name = "ARGS")]
        extra_args: Vec<String>,
    },
    /// List which known config files the workspace has
    Configs,
}
