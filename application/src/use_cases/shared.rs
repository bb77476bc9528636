//! Shared utilities for use cases.
//!
//! Contains tool selection and the error reports for missing tools, used
//! across the run use cases (RunLint, RunFormat, RunTest).

use crate::config::LftConfig;
use crate::ports::toolchain::RunContext;
use lft_domain::{ToolCategory, ToolDescriptor, ToolReport};
use tracing::debug;

/// Pick the tool to run from a category's descriptors.
///
/// Precedence: an explicitly requested tool (must be available, no
/// fallback), then the configured preference (falls back when not
/// configured in the workspace), then the first available by priority.
pub(crate) fn select_tool(
    tools: &[ToolDescriptor],
    requested: Option<&str>,
    preferred: Option<&str>,
) -> Option<ToolDescriptor> {
    if let Some(name) = requested {
        return tools
            .iter()
            .find(|t| t.available && t.name == name)
            .cloned();
    }
    if let Some(name) = preferred {
        if let Some(tool) = tools.iter().find(|t| t.available && t.name == name) {
            return Some(tool.clone());
        }
        debug!("Preferred tool '{name}' is not configured in this workspace");
    }
    tools.iter().find(|t| t.available).cloned()
}

/// Error report for the case where no runnable tool exists.
///
/// An explicit request gets an error naming the request and listing what is
/// available; otherwise the report carries installation guidance.
pub(crate) fn no_tool_report(
    category: ToolCategory,
    requested: Option<&str>,
    tools: &[ToolDescriptor],
) -> ToolReport {
    match requested {
        Some(name) => {
            let available: Vec<String> = tools
                .iter()
                .filter(|t| t.available)
                .map(|t| t.name.clone())
                .collect();
            ToolReport::error(
                category.operation(),
                format!(
                    "Requested {} '{}' not available",
                    category.display_name(),
                    name
                ),
            )
            .with_details(format!(
                "Available {}: {}",
                category.display_name_plural(),
                available.join(", ")
            ))
        }
        None => ToolReport::error(
            category.operation(),
            format!("No {} available", category.display_name()),
        )
        .with_details(category.install_hint()),
    }
}

/// Run context for one invocation, with per-tool threshold resolution.
pub(crate) fn run_context(
    config: &LftConfig,
    work_dir: &str,
    custom_args: &[String],
    tool: &str,
) -> RunContext {
    RunContext {
        work_dir: work_dir.to_string(),
        quick_timeout: config.quick_timeout,
        default_timeout: config.default_timeout,
        max_files_per_batch: config.max_files_per_batch,
        fatal_threshold: config.fatal_threshold_for(tool),
        custom_args: custom_args.to_vec(),
    }
}
