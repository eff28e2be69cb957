//! JSON files shared between service writers and the finalize phase.

use serde::Serialize;

use crate::domain::{AppError, FlatCredentialStore};
use crate::ports::ProjectFilesystem;

/// Read the flat credential store; an absent or blank file is an empty store.
pub(crate) fn read_flat_store<F: ProjectFilesystem>(
    project: &F,
    path: &str,
) -> Result<FlatCredentialStore, AppError> {
    if !project.file_exists(path) {
        return Ok(FlatCredentialStore::new());
    }
    let content = project.read_file(path)?;
    if content.trim().is_empty() {
        return Ok(FlatCredentialStore::new());
    }
    FlatCredentialStore::from_json_str(&content, path)
}

/// Shallow-merge `additions` into the store at `path`.
pub(crate) fn extend_flat_store<F: ProjectFilesystem>(
    project: &F,
    path: &str,
    additions: FlatCredentialStore,
) -> Result<(), AppError> {
    let mut store = read_flat_store(project, path)?;
    store.extend(additions);
    write_json(project, path, &store)
}

/// Write `value` as pretty-printed JSON with a trailing newline.
pub(crate) fn write_json<F: ProjectFilesystem, S: Serialize>(
    project: &F,
    path: &str,
    value: &S,
) -> Result<(), AppError> {
    let mut content = serde_json::to_string_pretty(value).map_err(|e| AppError::json(path, e))?;
    content.push('\n');
    project.write_file(path, &content)
}
