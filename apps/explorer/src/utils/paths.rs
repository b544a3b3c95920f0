//! Path utilities for Explorer
//!
//! This module contains utilities for working with user-supplied paths.

use std::path::{Path, PathBuf};

/// Expand tilde (~) to the user's home directory
///
/// # Arguments
/// * `path` - A path string that may start with ~/
///
/// # Returns
/// The expanded path with ~ replaced by the home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = home_dir() {
            return home.join(stripped);
        }
    } else if path == "~" {
        if let Some(home) = home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

fn home_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Resolve `path` against the current directory without touching symlinks
///
/// Unlike `fs::canonicalize` this keeps plain drive paths on Windows, which
/// Explorer needs for `/select,`.
pub fn make_absolute(path: &Path) -> std::io::Result<PathBuf> {
    std::path::absolute(path)
}

/// Render a path the way the OS spells it
pub fn to_os_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Folder containing `path`, or None for roots and bare names
pub fn parent_folder(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}
