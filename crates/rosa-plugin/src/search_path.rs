//! The platform executable search path (`PATH`) and its normalized directory list.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

const PATH_VAR: &str = "PATH";

/// A raw search-path value, split with the platform list separator on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    raw: OsString,
}

impl SearchPath {
    pub fn new(raw: impl Into<OsString>) -> Self {
        Self { raw: raw.into() }
    }

    /// Read `PATH` from the process environment. An unset variable is an empty path.
    pub fn from_env() -> Self {
        Self::new(std::env::var_os(PATH_VAR).unwrap_or_default())
    }

    /// Join directories back into a search-path value.
    pub fn from_dirs<I, P>(dirs: I) -> Result<Self, std::env::JoinPathsError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<OsStr>,
    {
        std::env::join_paths(dirs).map(Self::new)
    }

    pub fn as_os_str(&self) -> &OsStr {
        &self.raw
    }

    /// Directories to scan: empty segments become `.`, then sorted and deduplicated.
    /// An empty value has no directories at all.
    pub fn directories(&self) -> Vec<PathBuf> {
        if self.raw.is_empty() {
            return Vec::new();
        }

        let mut dirs: Vec<PathBuf> = std::env::split_paths(&self.raw)
            .map(|dir| {
                if dir.as_os_str().is_empty() {
                    PathBuf::from(".")
                } else {
                    dir
                }
            })
            .collect();

        // Byte-wise on the whole string, not per path component.
        dirs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
        dirs.dedup();
        dirs
    }
}
