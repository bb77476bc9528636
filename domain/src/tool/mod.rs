//! Tool domain module
//!
//! Defines the three tool categories the orchestrator manages and the
//! descriptors produced when a workspace is scanned for them.
//!
//! # Overview
//!
//! Detection never asks whether a binary is on `PATH`. A tool is *available*
//! when the workspace configuration references it, and selection picks the
//! highest-priority available tool per category:
//!
//! | Category | Priority order |
//! |----------|----------------|
//! | Linter | ruff, flake8, pylint, mypy, pydocstyle, bandit |
//! | Formatter | black, ruff, isort, autopep8, yapf |
//! | Tester | pytest, nose2, unittest |
//!
//! # Key Types
//!
//! - [`ToolCategory`] — linter / formatter / tester, with priority lists
//! - [`ToolDescriptor`] — one tool's detection evidence
//! - [`WorkspaceTools`] — full detection result with per-category vectors

pub mod category;
pub mod descriptor;

pub use category::{FORMATTER_PRIORITY, LINTER_PRIORITY, TESTER_PRIORITY, ToolCategory};
pub use descriptor::{Recommended, ToolDescriptor, WorkspaceTools};
