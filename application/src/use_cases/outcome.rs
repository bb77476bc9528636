//! Result type returned by the run use cases.

use lft_domain::{CommandResult, ToolReport};
use serde::{Deserialize, Serialize};

/// Everything a caller gets back from one orchestrated run.
///
/// The report is always present. The raw command result exists only when a
/// child process actually ran; selection failures and empty workspaces
/// produce a report alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunOutcome {
    pub report: ToolReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<CommandResult>,
}

impl RunOutcome {
    /// Outcome for a run that never spawned a process.
    pub fn report_only(report: ToolReport) -> Self {
        Self {
            report,
            command: None,
        }
    }

    /// Outcome for a run backed by a real command.
    pub fn executed(report: ToolReport, command: CommandResult) -> Self {
        Self {
            report,
            command: Some(command),
        }
    }
}
