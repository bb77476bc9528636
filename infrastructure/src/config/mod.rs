//! Configuration file loading for python-lft
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./lft.toml` or `./.lft.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/python-lft/config.toml`
//! 4. Fallback: `~/.config/python-lft/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileConfig, FileExecutionConfig, FileOutputConfig, FileToolsConfig,
    FileWorkspaceConfig,
};
pub use loader::ConfigLoader;
