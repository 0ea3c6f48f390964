//! Utility functions and helpers

use std::fs;
use std::path::Path;

/// Result of checking a filesystem path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAccess {
    /// Path exists and its contents can be read
    Readable,
    /// Nothing exists at the path
    Missing,
    /// Path exists but cannot be read by this process
    Unreadable,
}

/// Check whether a path exists and is readable.
///
/// Any failure to stat the path (not found, a file used as a directory,
/// symlink loops, a locked parent) counts as missing. Directories count as
/// readable when they can be listed, files when they can be opened.
pub fn check_access(path: &Path) -> PathAccess {
    let Ok(metadata) = fs::metadata(path) else {
        return PathAccess::Missing;
    };

    let readable = if metadata.is_dir() {
        fs::read_dir(path).is_ok()
    } else {
        fs::File::open(path).is_ok()
    };

    if readable {
        PathAccess::Readable
    } else {
        PathAccess::Unreadable
    }
}
