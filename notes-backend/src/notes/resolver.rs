//! Maps user-supplied note names onto paths inside the notes directory.
//!
//! Purely syntactic: nothing here touches the filesystem.

use super::error::{NoteError, Result};
use std::path::{Path, PathBuf};

/// Reduce a note name to its final path segment.
///
/// Both `/` and `\` count as separators, so `../../etc/passwd` becomes
/// `passwd` and `C:\tmp\x` becomes `x` on every platform. Segments that are
/// empty, start with `.` (which covers `.` and `..`), or contain a NUL byte
/// are rejected. Dot-names are reserved for the store's staging files.
pub fn sanitize(name: &str) -> Result<&str> {
    let segment = name
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default();

    if segment.is_empty() {
        return Err(NoteError::InvalidName(format!("'{}' has no file name", name)));
    }
    if segment.starts_with('.') {
        return Err(NoteError::InvalidName(format!(
            "'{}' must not start with '.'",
            segment
        )));
    }
    if segment.contains('\0') {
        return Err(NoteError::InvalidName("name contains a NUL byte".to_string()));
    }

    Ok(segment)
}

/// Resolve a note name to a file path directly under `root`
pub fn resolve(name: &str, root: &Path) -> Result<PathBuf> {
    Ok(root.join(sanitize(name)?))
}
