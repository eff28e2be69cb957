//! Project-level filesystem operations.
//!
//! All generated output goes through this port so the orchestrator can run
//! against a real directory or an in-memory double.

use std::path::PathBuf;

use crate::domain::AppError;

/// Port for file I/O scoped to the generated project's root.
///
/// All `path` arguments are relative to the project root.
/// Implementations must reject paths that escape the root boundary.
pub trait ProjectFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Check whether a file exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Resolve a relative path to an absolute path within the project root.
    fn resolve_path(&self, path: &str) -> PathBuf;
}
