//! Filesystem adapter for `ProjectFilesystem`.
//!
//! `FilesystemStore` owns the project root path and enforces path-traversal
//! safety for every operation.

mod project_filesystem;

use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a project directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

// ── Path safety ────────────────────────────────────────────────────────

impl FilesystemStore {
    /// Validates that a path (after logical normalization) is within the root.
    pub(crate) fn validate_path_within_root(&self, path: &Path) -> Result<(), AppError> {
        let full_path = if path.is_absolute() { path.to_path_buf() } else { self.root.join(path) };

        let normalized_path = normalize_path(&full_path);
        let normalized_root = normalize_path(&self.root);

        if !normalized_path.starts_with(&normalized_root) {
            return Err(AppError::PathTraversal(path.display().to_string()));
        }

        Ok(())
    }
}

/// Normalize path by resolving `.` and `..` components logically.
/// This does not access the filesystem.
pub(crate) fn normalize_path(path: &Path) -> PathBuf {
    use std::path::Component;

    let mut ret = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(..) | Component::RootDir => ret.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                ret.pop();
            }
            Component::Normal(c) => ret.push(c),
        }
    }
    ret
}
