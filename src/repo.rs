//! Git repository detection.
//!
//! A purely filesystem-based walk: no `git` process is spawned. A `.git`
//! entry may be a directory (regular repository) or a file (worktree or
//! submodule).

use std::path::{Path, PathBuf};

/// Name of the marker entry that denotes a repository root.
pub const GIT_MARKER: &str = ".git";

/// Walk up from `start` looking for a `.git` entry.
///
/// Returns the directory that contains the marker, or `None` once the
/// filesystem root has been checked without finding one.
pub fn find_repo_root(start: &Path) -> Option<PathBuf> {
    let mut current = start;

    loop {
        if current.join(GIT_MARKER).exists() {
            return Some(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => return None,
        }
    }
}

/// Check whether `start` or any of its ancestors is a repository root.
pub fn is_inside_repo(start: &Path) -> bool {
    let root = find_repo_root(start);
    tracing::debug!("Repository lookup from {}: {:?}", start.display(), root);
    root.is_some()
}

/// Check whether the current working directory is inside a repository.
///
/// An unreadable working directory counts as "not found".
pub fn is_version_controlled() -> bool {
    match std::env::current_dir() {
        Ok(cwd) => is_inside_repo(&cwd),
        Err(e) => {
            tracing::debug!("Cannot determine working directory: {}", e);
            false
        }
    }
}
