//! File path helpers.

use std::path::{Path, PathBuf};

/// Resolve `path` against the current directory.
///
/// Resolution is purely lexical, the file does not have to exist. If the
/// current directory cannot be read the path is returned unchanged, leaving
/// the subsequent load to report the failure.
pub fn full_path(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
