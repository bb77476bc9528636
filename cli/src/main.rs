//! CLI entrypoint for python-lft
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::Result;
use clap::Parser;
use lft_application::{
    CheckConfigsInput, CheckConfigsUseCase, DetectToolsInput, DetectToolsUseCase, NoProgress,
    RunFormatInput, RunFormatUseCase, RunLintInput, RunLintUseCase, RunOutcome, RunProgress,
    RunTestInput, RunTestUseCase,
};
use lft_infrastructure::{ConfigLoader, FsWorkspaceScanner, LocalToolchain, TokioProcessRunner};
use lft_presentation::{
    Cli, Command, ConsoleRenderer, OutputMode, ProgressReporter, SimpleProgress, formatter_for,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the log writer alive until the process exits.
    let _guard = init_logging(cli.verbose, cli.log_dir.as_deref());

    info!("Starting python-lft");

    // Load configuration files unless disabled
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };
    file_config.validate()?;

    if !file_config.output.color {
        colored::control::set_override(false);
    }
    let exclude_patterns = file_config.workspace.exclude_patterns.clone();
    let config = file_config.into_lft_config();

    let mode = cli
        .output
        .unwrap_or_else(|| OutputMode::from(config.formatter_style));

    // === Dependency Injection ===
    // Create infrastructure adapters (process runner, toolchain, scanner)
    let runner = Arc::new(TokioProcessRunner::new());
    let toolchain = Arc::new(LocalToolchain::new(runner));
    let mut scanner = FsWorkspaceScanner::new();
    if let Some(patterns) = exclude_patterns {
        scanner = scanner.with_exclude_patterns(patterns);
    }
    let scanner = Arc::new(scanner);

    let progress: Box<dyn RunProgress> = if cli.quiet {
        Box::new(NoProgress)
    } else if mode == OutputMode::Json {
        Box::new(SimpleProgress)
    } else {
        Box::new(ProgressReporter::new())
    };

    let exit = match cli.command {
        Command::Detect => {
            let use_case = DetectToolsUseCase::new(scanner);
            let tools = use_case.execute(DetectToolsInput::new(&cli.work_dir));
            match mode {
                OutputMode::Json => println!("{}", ConsoleRenderer::detection_json(&tools)),
                _ => println!("{}", ConsoleRenderer::render_detection(&tools)),
            }
            0
        }
        Command::Lint {
            tool,
            target,
            extra_args,
        } => {
            let use_case = RunLintUseCase::new(scanner, toolchain, config);
            let mut input = RunLintInput::new()
                .with_target(target)
                .with_work_dir(&cli.work_dir)
                .with_custom_args(extra_args);
            if let Some(tool) = tool {
                input = input.with_tool(tool);
            }
            let outcome = use_case.execute_with_progress(input, progress.as_ref()).await;
            render_outcome(&outcome, mode)
        }
        Command::Format {
            tool,
            target,
            line_length,
            extra_args,
        } => {
            let use_case = RunFormatUseCase::new(scanner, toolchain, config);
            let mut input = RunFormatInput::new()
                .with_target(target)
                .with_work_dir(&cli.work_dir)
                .with_custom_args(extra_args);
            if let Some(tool) = tool {
                input = input.with_tool(tool);
            }
            if let Some(length) = line_length {
                input = input.with_line_length(length);
            }
            let outcome = use_case.execute_with_progress(input, progress.as_ref()).await;
            render_outcome(&outcome, mode)
        }
        Command::Test {
            tool,
            target,
            extra_args,
        } => {
            let use_case = RunTestUseCase::new(scanner, toolchain, config);
            let mut input = RunTestInput::new()
                .with_target(target)
                .with_work_dir(&cli.work_dir)
                .with_custom_args(extra_args);
            if let Some(tool) = tool {
                input = input.with_tool(tool);
            }
            let outcome = use_case.execute_with_progress(input, progress.as_ref()).await;
            render_outcome(&outcome, mode)
        }
        Command::Configs => {
            let use_case = CheckConfigsUseCase::new(scanner);
            let presence = use_case.execute(CheckConfigsInput::new(&cli.work_dir));
            match mode {
                OutputMode::Json => println!("{}", ConsoleRenderer::configs_json(&presence)),
                _ => println!("{}", ConsoleRenderer::render_configs(&presence)),
            }
            0
        }
    };

    Ok(ExitCode::from(exit))
}

/// Print one run outcome and translate its status into an exit code.
fn render_outcome(outcome: &RunOutcome, mode: OutputMode) -> u8 {
    match mode.style() {
        Some(style) => println!("{}", formatter_for(style).format(&outcome.report)),
        None => println!("{}", ConsoleRenderer::run_json(outcome)),
    }
    u8::from(outcome.report.status.is_error())
}

/// Initialize logging based on verbosity level, optionally into a file.
fn init_logging(
    verbose: u8,
    log_dir: Option<&Path>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "python-lft.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        None => {
            // Results go to stdout; logs stay on stderr.
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            None
        }
    }
}
