//! `ProjectFilesystem` implementation for `FilesystemStore`.

use std::fs;
use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::FilesystemStore;

impl ProjectFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        fs::read_to_string(full_path).map_err(AppError::from)
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.resolve_path(path);
        self.validate_path_within_root(&full_path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn file_exists(&self, path: &str) -> bool {
        let full_path = self.resolve_path(path);
        if self.validate_path_within_root(&full_path).is_err() {
            return false;
        }
        full_path.is_file()
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        self.root().join(path)
    }
}
