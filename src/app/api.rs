//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::adapters::{
    EmbeddedServiceCatalog, EmbeddedTemplates, FilesystemStore, RecordingParentContext,
    StandaloneParentContext, default_label_table,
};
use crate::app::config::load_config;
use crate::app::{
    AppContext,
    commands::{generate, remap, services},
};

pub use crate::app::commands::generate::GenerationReport;
pub use crate::app::commands::generate::finalize::Finalized;
pub use crate::app::commands::services::ServiceSummary;
pub use crate::domain::{AppError, GeneratorConfig, ServiceConfiguration};

type ProjectContext = AppContext<FilesystemStore, EmbeddedServiceCatalog, EmbeddedTemplates>;

/// Result of a generation run against a recording parent.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateOutcome {
    pub report: GenerationReport,
    /// Fragments the composing generator would have to apply.
    pub parent: RecordingParentContext,
}

/// Create an `AppContext` for a given project root, honoring `.svcgen.toml`.
fn create_context(path: PathBuf) -> Result<ProjectContext, AppError> {
    let project = FilesystemStore::new(path);
    let config = load_config(&project)?;
    let labels = config.label_table(default_label_table()?)?;
    Ok(AppContext::new(project, EmbeddedServiceCatalog::new()?, EmbeddedTemplates::new()?, labels))
}

/// Read the generator configuration at a project root.
pub fn generator_config_at(path: impl Into<PathBuf>) -> Result<GeneratorConfig, AppError> {
    load_config(&FilesystemStore::new(path.into()))
}

/// Parse a service configuration JSON file.
pub fn read_service_configuration(path: &Path) -> Result<ServiceConfiguration, AppError> {
    let content = std::fs::read_to_string(path)?;
    ServiceConfiguration::from_json_str(&content, &path.display().to_string())
}

// =============================================================================
// Generate Command API
// =============================================================================

/// Generate services into the current directory.
pub fn generate(config: &ServiceConfiguration) -> Result<GenerateOutcome, AppError> {
    generate_at(std::env::current_dir()?, config)
}

/// Generate services into `path`, recording what the parent would receive.
pub fn generate_at(
    path: impl Into<PathBuf>,
    config: &ServiceConfiguration,
) -> Result<GenerateOutcome, AppError> {
    let ctx = create_context(path.into())?;
    let mut parent = RecordingParentContext::new();
    let report = generate::execute(&ctx, &mut parent, config)?;
    Ok(GenerateOutcome { report, parent })
}

/// Generate services into `path` with no parent context.
///
/// Fails with [`AppError::UnsupportedContext`] as soon as a service is enabled.
pub fn generate_standalone_at(
    path: impl Into<PathBuf>,
    config: &ServiceConfiguration,
) -> Result<GenerationReport, AppError> {
    let ctx = create_context(path.into())?;
    generate::execute(&ctx, &mut StandaloneParentContext, config)
}

// =============================================================================
// Remap Command API
// =============================================================================

/// Regroup the flat `config/localdev-config.json` at `path` and emit mappings.
pub fn remap_at(
    path: impl Into<PathBuf>,
    config: &ServiceConfiguration,
) -> Result<Finalized, AppError> {
    let ctx = create_context(path.into())?;
    remap::execute(&ctx, config)
}

// =============================================================================
// Services Command API
// =============================================================================

/// List supported services with prefixes from the current directory's label table.
pub fn services() -> Result<Vec<ServiceSummary>, AppError> {
    services_at(std::env::current_dir()?)
}

/// List supported services with prefixes from the label table in effect at `path`.
pub fn services_at(path: impl Into<PathBuf>) -> Result<Vec<ServiceSummary>, AppError> {
    let ctx = create_context(path.into())?;
    Ok(services::list(ctx.catalog(), ctx.labels()))
}
