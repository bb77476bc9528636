//! Catalog of known configuration files and workspace scan constants.
//!
//! The catalog is the fixed universe of files the scanner probes for. Each
//! entry carries the parse format for its content, or `None` for files that
//! are only ever checked for presence (lock files, marker dotfiles without a
//! recognized dialect).

use serde::{Deserialize, Serialize};

/// How a catalog entry's content is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigFormat {
    /// TOML documents (pyproject.toml, ruff.toml, ...)
    Toml,
    /// YAML documents (bandit.yaml, CI configs, ...)
    Yaml,
    /// JSON documents (.vscode/settings.json)
    Json,
    /// INI-style section files (setup.cfg, tox.ini, .flake8, ...)
    Ini,
    /// Python source scanned for literal assignments (setup.py, conf.py)
    PythonSource,
    /// requirements*.txt dependency lists
    Requirements,
    /// Plain-text files reduced to a descriptive record
    PlainText,
    /// Pipfile, captured as raw content
    Pipfile,
}

/// A known configuration file the scanner probes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Canonical filename or path, relative to the workspace root.
    pub name: &'static str,
    /// Parse format, or `None` when the file is presence-only.
    pub format: Option<ConfigFormat>,
}

const fn entry(name: &'static str, format: ConfigFormat) -> CatalogEntry {
    CatalogEntry {
        name,
        format: Some(format),
    }
}

const fn marker(name: &'static str) -> CatalogEntry {
    CatalogEntry { name, format: None }
}

/// Hub files whose parsed content (not just filename) is searched for tool
/// references during detection.
pub const HUB_FILES: &[&str] = &["pyproject.toml", "setup.cfg"];

/// The CI-matrix file whose sections are consulted during settings extraction.
pub const CI_MATRIX_FILE: &str = "tox.ini";

/// Path patterns excluded from Python file discovery.
pub const DEFAULT_EXCLUDES: &[&str] = &[
    "v/*",
    "venv/*",
    ".venv/*",
    "env/*",
    ".env/*",
    "**/site-packages/**",
    "**/__pycache__/**",
    ".git/*",
    "build/*",
    "dist/*",
    ".tox/*",
];

/// Known configuration files, in detection order.
pub const CONFIG_CATALOG: &[CatalogEntry] = &[
    // Main project configuration
    entry("pyproject.toml", ConfigFormat::Toml),
    entry("setup.cfg", ConfigFormat::Ini),
    entry("setup.py", ConfigFormat::PythonSource),
    // Tool-specific TOML configs
    entry("ruff.toml", ConfigFormat::Toml),
    entry(".ruff.toml", ConfigFormat::Toml),
    entry("black.toml", ConfigFormat::Toml),
    entry(".black.toml", ConfigFormat::Toml),
    // Testing configurations
    entry("pytest.ini", ConfigFormat::Ini),
    entry(".pytest.ini", ConfigFormat::Ini),
    entry("tox.ini", ConfigFormat::Ini),
    entry("nose2.cfg", ConfigFormat::Ini),
    entry("unittest.cfg", ConfigFormat::Ini),
    // Linting configurations
    entry(".flake8", ConfigFormat::Ini),
    entry("flake8.ini", ConfigFormat::Ini),
    entry(".pylintrc", ConfigFormat::Ini),
    marker("pylintrc"),
    marker(".pylint"),
    entry("mypy.ini", ConfigFormat::Ini),
    entry(".mypy.ini", ConfigFormat::Ini),
    entry("bandit.yaml", ConfigFormat::Yaml),
    entry("bandit.yml", ConfigFormat::Yaml),
    marker(".bandit"),
    entry(".bandit.yaml", ConfigFormat::Yaml),
    entry(".bandit.yml", ConfigFormat::Yaml),
    // Formatting configurations
    entry(".isort.cfg", ConfigFormat::Ini),
    entry("isort.cfg", ConfigFormat::Ini),
    entry(".style.yapf", ConfigFormat::Ini),
    entry("yapf.ini", ConfigFormat::Ini),
    entry(".yapfrc", ConfigFormat::Ini),
    // Coverage and quality
    entry(".coveragerc", ConfigFormat::Ini),
    entry("coverage.ini", ConfigFormat::Ini),
    marker(".coverage"),
    // Pre-commit and CI/CD
    entry(".pre-commit-config.yaml", ConfigFormat::Yaml),
    entry(".pre-commit-config.yml", ConfigFormat::Yaml),
    entry(".github/workflows/*.yml", ConfigFormat::Yaml),
    entry(".github/workflows/*.yaml", ConfigFormat::Yaml),
    // Documentation
    entry("mkdocs.yml", ConfigFormat::Yaml),
    entry("mkdocs.yaml", ConfigFormat::Yaml),
    entry("conf.py", ConfigFormat::PythonSource),
    // Dependency management
    entry("requirements.txt", ConfigFormat::Requirements),
    entry("requirements-dev.txt", ConfigFormat::Requirements),
    entry("requirements-test.txt", ConfigFormat::Requirements),
    entry("dev-requirements.txt", ConfigFormat::Requirements),
    entry("test-requirements.txt", ConfigFormat::Requirements),
    entry("Pipfile", ConfigFormat::Pipfile),
    marker("poetry.lock"),
    entry("conda-environment.yml", ConfigFormat::Yaml),
    entry("environment.yml", ConfigFormat::Yaml),
    // Version control
    entry(".gitignore", ConfigFormat::PlainText),
    marker(".gitattributes"),
    // Editor configurations
    entry(".editorconfig", ConfigFormat::PlainText),
    entry(".vscode/settings.json", ConfigFormat::Json),
    // Docker and deployment
    entry("Dockerfile", ConfigFormat::PlainText),
    entry("docker-compose.yml", ConfigFormat::Yaml),
    entry("docker-compose.yaml", ConfigFormat::Yaml),
];

/// Look up a catalog entry by filename.
pub fn catalog_entry(name: &str) -> Option<&'static CatalogEntry> {
    CONFIG_CATALOG.iter().find(|e| e.name == name)
}
