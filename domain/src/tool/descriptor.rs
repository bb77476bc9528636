//! Detected tool descriptors and the workspace-wide detection result.

use super::category::ToolCategory;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One tool as seen by detection.
///
/// `available` means the workspace *configures* the tool, not that its binary
/// is installed. A tool counts as configured when at least one config file
/// references it or settings for it could be extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    pub name: String,
    /// Program invoked when this tool runs. Currently always equal to `name`.
    pub command: String,
    pub available: bool,
    /// Config files referencing the tool, in catalog order.
    pub config_files: Vec<String>,
    /// Merged settings extracted for the tool, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_data: Option<Map<String, Value>>,
}

impl ToolDescriptor {
    /// Build a descriptor from detection evidence, deriving `available`.
    pub fn detected(
        name: impl Into<String>,
        config_files: Vec<String>,
        config_data: Option<Map<String, Value>>,
    ) -> Self {
        let name = name.into();
        let available =
            !config_files.is_empty() || config_data.as_ref().is_some_and(|m| !m.is_empty());
        Self {
            command: name.clone(),
            name,
            available,
            config_files,
            config_data,
        }
    }

    /// Descriptor for a tool with no configuration evidence.
    pub fn absent(name: impl Into<String>) -> Self {
        Self::detected(name, Vec::new(), None)
    }
}

/// Best tool per category, by priority among available tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommended {
    pub linter: Option<String>,
    pub formatter: Option<String>,
    pub tester: Option<String>,
}

/// Everything detection learned about a workspace.
///
/// Each category vector holds one descriptor per priority-list entry, in
/// priority order, available or not. `config_files` maps every catalog
/// filename to whether it was found and parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkspaceTools {
    pub linters: Vec<ToolDescriptor>,
    pub formatters: Vec<ToolDescriptor>,
    pub testers: Vec<ToolDescriptor>,
    pub config_files: BTreeMap<String, bool>,
}

impl WorkspaceTools {
    /// Descriptors for one category, in priority order.
    pub fn category(&self, category: ToolCategory) -> &[ToolDescriptor] {
        match category {
            ToolCategory::Linter => &self.linters,
            ToolCategory::Formatter => &self.formatters,
            ToolCategory::Tester => &self.testers,
        }
    }

    /// Highest-priority available tool in a category.
    pub fn best(&self, category: ToolCategory) -> Option<&ToolDescriptor> {
        self.category(category).iter().find(|t| t.available)
    }

    /// An available tool by name, if the category configures it.
    pub fn find_available(&self, category: ToolCategory, name: &str) -> Option<&ToolDescriptor> {
        self.category(category)
            .iter()
            .find(|t| t.available && t.name == name)
    }

    /// Names of every available tool in a category, in priority order.
    pub fn available_names(&self, category: ToolCategory) -> Vec<String> {
        self.category(category)
            .iter()
            .filter(|t| t.available)
            .map(|t| t.name.clone())
            .collect()
    }

    /// Best tool per category, for detection summaries.
    pub fn recommended(&self) -> Recommended {
        Recommended {
            linter: self.best(ToolCategory::Linter).map(|t| t.name.clone()),
            formatter: self.best(ToolCategory::Formatter).map(|t| t.name.clone()),
            tester: self.best(ToolCategory::Tester).map(|t| t.name.clone()),
        }
    }
}
