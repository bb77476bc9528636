//! Console rendering for detection results and run outcomes.

use colored::Colorize;
use lft_application::RunOutcome;
use lft_domain::{ToolDescriptor, WorkspaceTools};
use std::collections::BTreeMap;

/// Formats detection results and run outcomes for terminal display
pub struct ConsoleRenderer;

impl ConsoleRenderer {
    /// Full detection overview with one section per category
    pub fn render_detection(tools: &WorkspaceTools) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Workspace Tools"));
        output.push('\n');

        output.push_str(&Self::section_header("Linters"));
        Self::push_tools(&mut output, &tools.linters);

        output.push_str(&Self::section_header("Formatters"));
        Self::push_tools(&mut output, &tools.formatters);

        output.push_str(&Self::section_header("Test runners"));
        Self::push_tools(&mut output, &tools.testers);

        output.push_str(&Self::section_header("Config files"));
        let found: Vec<&str> = tools
            .config_files
            .iter()
            .filter(|(_, present)| **present)
            .map(|(name, _)| name.as_str())
            .collect();
        if found.is_empty() {
            output.push_str(&format!("  {}\n", "none found".dimmed()));
        } else {
            for name in &found {
                output.push_str(&format!("  {} {}\n", "v".green(), name));
            }
        }
        output.push_str(&format!(
            "  {} of {} known files present\n",
            found.len(),
            tools.config_files.len()
        ));

        let recommended = tools.recommended();
        output.push_str(&format!(
            "\n{} linter={} formatter={} tester={}\n",
            "Recommended:".cyan().bold(),
            recommended.linter.as_deref().unwrap_or("-"),
            recommended.formatter.as_deref().unwrap_or("-"),
            recommended.tester.as_deref().unwrap_or("-"),
        ));

        output.push_str(&Self::footer());

        output
    }

    /// Detection result as JSON, with the best tool per category inlined
    pub fn detection_json(tools: &WorkspaceTools) -> String {
        let mut value = serde_json::to_value(tools).unwrap_or_else(|_| serde_json::json!({}));
        if let Some(map) = value.as_object_mut() {
            let recommended =
                serde_json::to_value(tools.recommended()).unwrap_or(serde_json::Value::Null);
            map.insert("recommended".to_string(), recommended);
        }
        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }

    /// Run outcome as JSON
    pub fn run_json(outcome: &RunOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Config presence map for terminal display
    pub fn render_configs(presence: &BTreeMap<String, bool>) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Config Files"));
        output.push('\n');
        for (name, present) in presence {
            if *present {
                output.push_str(&format!("  {} {}\n", "v".green(), name));
            } else {
                output.push_str(&format!("  {} {}\n", "x".red(), name.as_str().dimmed()));
            }
        }
        output.push_str(&Self::footer());

        output
    }

    /// Config presence map as JSON
    pub fn configs_json(presence: &BTreeMap<String, bool>) -> String {
        serde_json::to_string_pretty(presence).unwrap_or_else(|_| "{}".to_string())
    }

    fn push_tools(output: &mut String, tools: &[ToolDescriptor]) {
        for tool in tools {
            if tool.available {
                let evidence = if tool.config_files.is_empty() {
                    String::new()
                } else {
                    format!("({})", tool.config_files.join(", "))
                };
                output.push_str(&format!(
                    "  {} {} {}\n",
                    "v".green(),
                    tool.name,
                    evidence.dimmed()
                ));
            } else {
                output.push_str(&format!("  {} {}\n", "x".red(), tool.name.as_str().dimmed()));
            }
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}
