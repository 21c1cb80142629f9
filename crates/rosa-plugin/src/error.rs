//! # Plugin Error Types
//!
//! Scan failures abort `find_plugins`; dispatch failures are reported after a
//! plugin was found, so callers can tell "no plugin" apart from "plugin failed".

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Plugin operation result type
pub type PluginResult<T> = Result<T, PluginError>;

#[derive(Debug, Error)]
pub enum PluginError {
    /// A search-path directory exists but could not be stat-ed or read.
    #[error("failed to scan plugin directory '{}': {source}", dir.display())]
    Scan {
        dir: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to start plugin '{}': {source}", path.display())]
    Spawn {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("plugin '{}' failed: {status}", path.display())]
    Exit { path: PathBuf, status: ExitStatus },
}

impl PluginError {
    pub(crate) fn scan(dir: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Scan {
            dir: dir.into(),
            source,
        }
    }

    /// Exit code of the plugin process, when it exited with one.
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Exit { status, .. } => status.code(),
            _ => None,
        }
    }
}
