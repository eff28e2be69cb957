//! Finalize phase: regroup the shared credential store and emit mappings.

use tracing::{debug, info};

use crate::domain::gitignore;
use crate::domain::paths::{GITIGNORE_FILE, LOCALDEV_CONFIG_FILE, MAPPINGS_FILE};
use crate::domain::{
    AccessPatternMap, AppError, Extraction, FlatCredentialStore, LabelTable,
    ServiceConfiguration, emit, extract,
};
use crate::ports::ProjectFilesystem;

use super::shared_files::{read_flat_store, write_json};

#[derive(Debug, Clone)]
pub struct Finalized {
    pub extraction: Extraction,
    pub mappings: AccessPatternMap,
    /// Whether `.gitignore` was created or appended to.
    pub gitignore_updated: bool,
}

pub fn finalize<F: ProjectFilesystem>(
    project: &F,
    labels: &LabelTable,
    config: &ServiceConfiguration,
) -> Result<Finalized, AppError> {
    let flat = read_flat_store(project, LOCALDEV_CONFIG_FILE)?;
    let extraction = regroup(&flat, labels, config);
    persist(project, labels, extraction)
}

/// Extract instances from the flat store without touching the project.
pub(crate) fn regroup(
    flat: &FlatCredentialStore,
    labels: &LabelTable,
    config: &ServiceConfiguration,
) -> Extraction {
    debug!(entries = flat.len(), "Transforming credentials output");
    extract(flat, labels, config)
}

/// Emit mappings, then write both JSON files and the `.gitignore` entry.
pub(crate) fn persist<F: ProjectFilesystem>(
    project: &F,
    labels: &LabelTable,
    extraction: Extraction,
) -> Result<Finalized, AppError> {
    let mappings = emit(&extraction.credentials, labels);

    write_json(project, LOCALDEV_CONFIG_FILE, &extraction.credentials)?;
    write_json(project, MAPPINGS_FILE, &mappings)?;
    info!(
        instances = extraction.credentials.len(),
        prefixes = mappings.len(),
        "Wrote credential mappings"
    );

    let gitignore_updated = ensure_gitignore_entry(project)?;

    Ok(Finalized { extraction, mappings, gitignore_updated })
}

fn ensure_gitignore_entry<F: ProjectFilesystem>(project: &F) -> Result<bool, AppError> {
    let existing = if project.file_exists(GITIGNORE_FILE) {
        Some(project.read_file(GITIGNORE_FILE)?)
    } else {
        None
    };

    match gitignore::with_entry(existing.as_deref(), LOCALDEV_CONFIG_FILE) {
        Some(content) => {
            project.write_file(GITIGNORE_FILE, &content)?;
            Ok(true)
        }
        None => {
            debug!("{} already ignores {}", GITIGNORE_FILE, LOCALDEV_CONFIG_FILE);
            Ok(false)
        }
    }
}
