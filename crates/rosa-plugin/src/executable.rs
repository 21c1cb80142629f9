//! Executability rules used by the directory scan.
//!
//! The dispatch path does not use these; it relies on the platform's own
//! program lookup instead.

use std::ffi::OsString;
use std::fs::Metadata;
use std::path::Path;

const WINDOWS_EXECUTABLE_EXTENSIONS: &[&str] = &["bat", "cmd", "com", "exe", "ps1"];

/// Any of the owner, group or other execute bits.
const EXECUTE_BITS: u32 = 0o111;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }
}

/// The parts of a file's metadata the executability rules look at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub file_name: OsString,
    pub is_dir: bool,
    /// Unix permission bits; 0 where the platform has none.
    pub mode: u32,
}

impl FileMeta {
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Self {
        Self {
            file_name: path.file_name().map(OsString::from).unwrap_or_default(),
            is_dir: metadata.is_dir(),
            mode: permission_bits(metadata),
        }
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode()
}

#[cfg(not(unix))]
fn permission_bits(_metadata: &Metadata) -> u32 {
    0
}

/// Whether `meta` describes an executable file on `platform`.
///
/// Unix looks only at the execute bits; Windows looks only at the extension
/// (`.bat`, `.cmd`, `.com`, `.exe`, `.ps1`, case-insensitive). Directories are
/// never executable.
pub fn is_executable(meta: &FileMeta, platform: Platform) -> bool {
    if meta.is_dir {
        return false;
    }

    match platform {
        Platform::Unix => meta.mode & EXECUTE_BITS != 0,
        Platform::Windows => Path::new(&meta.file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                WINDOWS_EXECUTABLE_EXTENSIONS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(ext))
            }),
    }
}
