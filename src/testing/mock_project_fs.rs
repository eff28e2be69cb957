//! Test double for `ProjectFilesystem`.

use std::path::PathBuf;

use crate::domain::AppError;
use crate::ports::ProjectFilesystem;

use super::test_files::TestFiles;

/// In-memory implementation of `ProjectFilesystem` for unit tests.
#[derive(Clone, Debug)]
pub struct MockProjectFs {
    files: TestFiles,
    fail_writes_to: Option<String>,
}

impl MockProjectFs {
    pub fn new(files: TestFiles) -> Self {
        Self { files, fail_writes_to: None }
    }

    /// Make every write to `path` fail with a permission error.
    pub fn failing_writes_to(mut self, path: &str) -> Self {
        self.fail_writes_to = Some(path.to_string());
        self
    }
}

impl ProjectFilesystem for MockProjectFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.files.get(path).ok_or_else(|| {
            AppError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "Mock file not found"))
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        if self.fail_writes_to.as_deref() == Some(path) {
            return Err(AppError::from(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "Mock write denied",
            )));
        }
        self.files.add(path, content);
        Ok(())
    }

    fn file_exists(&self, path: &str) -> bool {
        self.files.files.lock().unwrap().contains_key(path)
    }

    fn resolve_path(&self, path: &str) -> PathBuf {
        PathBuf::from(path)
    }
}
