//! Workspace scanning: config-file parsing and Python source discovery

mod excludes;
mod parsers;
mod scanner;

pub use scanner::FsWorkspaceScanner;
