//! Report formatter trait and the two text styles.
//!
//! Both styles are plain text so output survives piping and logging intact.
//! Color belongs to the console renderer, not here.

use lft_domain::{FormatterStyle, ToolReport, ToolStatus};

/// Trait for rendering a classified report as text
pub trait ReportFormatter: Send + Sync {
    /// Render one report
    fn format(&self, report: &ToolReport) -> String;
}

/// Multi-line style: tagged status line, raw tool output below.
pub struct StandardFormatter;

impl StandardFormatter {
    fn tag(status: ToolStatus) -> &'static str {
        match status {
            ToolStatus::Success => "[SUCCESS]",
            ToolStatus::Warning => "[WARNING]",
            ToolStatus::Error => "[ERROR]",
        }
    }
}

impl ReportFormatter for StandardFormatter {
    fn format(&self, report: &ToolReport) -> String {
        let mut out = format!(
            "{} {}: {}",
            Self::tag(report.status),
            report.tool_name,
            report.message
        );
        if let Some(details) = &report.details {
            out.push_str("\n\n");
            out.push_str(details);
        }
        out
    }
}

/// Single-line style for terse logs; details are dropped.
pub struct CompactFormatter;

impl CompactFormatter {
    fn tag(status: ToolStatus) -> &'static str {
        match status {
            ToolStatus::Success => "OK:",
            ToolStatus::Warning => "WARN:",
            ToolStatus::Error => "ERROR:",
        }
    }
}

impl ReportFormatter for CompactFormatter {
    fn format(&self, report: &ToolReport) -> String {
        format!(
            "{} {} - {}",
            Self::tag(report.status),
            report.tool_name,
            report.message
        )
    }
}

/// Formatter for a configured style
pub fn formatter_for(style: FormatterStyle) -> Box<dyn ReportFormatter> {
    match style {
        FormatterStyle::Standard => Box::new(StandardFormatter),
        FormatterStyle::Compact => Box::new(CompactFormatter),
    }
}
