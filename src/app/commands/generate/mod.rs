//! Generate command: compose service scaffolding and credential mappings.
//!
//! Runs four phases strictly in sequence. `initialize` selects configured
//! services, `configure` turns them into plans, `write` runs one service
//! writer per plan, and `finalize` regroups the shared credential store
//! exactly once after every writer has finished. Any error aborts the run.

pub mod configure;
pub mod finalize;
pub mod initialize;
pub(crate) mod shared_files;
pub mod write;

use serde::Serialize;

use crate::app::AppContext;
use crate::domain::paths::{GITIGNORE_FILE, LOCALDEV_CONFIG_FILE, MAPPINGS_FILE};
use crate::domain::{
    AccessPatternMap, AppError, GroupingEvent, InstanceCredentialStore, ServiceConfiguration,
};
use crate::ports::{ParentContext, ProjectFilesystem, ServiceCatalog, TemplateRenderer};

/// Summary of a generation run.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationReport {
    /// Generated service keys, in generation order.
    pub services: Vec<String>,
    /// Project-relative paths written.
    pub files: Vec<String>,
    pub credentials: InstanceCredentialStore,
    pub mappings: AccessPatternMap,
    pub trace: Vec<GroupingEvent>,
}

impl GenerationReport {
    /// Credential keys left out of both output files.
    pub fn dropped_keys(&self) -> Vec<&str> {
        self.trace.iter().filter(|event| event.is_dropped()).map(GroupingEvent::key).collect()
    }
}

/// Execute the generate command.
pub fn execute<F, C, T, P>(
    ctx: &AppContext<F, C, T>,
    parent: &mut P,
    config: &ServiceConfiguration,
) -> Result<GenerationReport, AppError>
where
    F: ProjectFilesystem,
    C: ServiceCatalog,
    T: TemplateRenderer,
    P: ParentContext + ?Sized,
{
    let selected = initialize::select_services(ctx.catalog(), config);
    let plans = configure::plan_services(ctx.catalog(), ctx.labels(), &selected)?;

    write::reset_shared_store(ctx.project())?;
    let mut files = Vec::new();
    for plan in &plans {
        files.extend(write::write_service(ctx, parent, plan)?);
    }

    let finalized = finalize::finalize(ctx.project(), ctx.labels(), config)?;
    files.push(LOCALDEV_CONFIG_FILE.to_string());
    files.push(MAPPINGS_FILE.to_string());
    if finalized.gitignore_updated {
        files.push(GITIGNORE_FILE.to_string());
    }

    Ok(GenerationReport {
        services: plans.iter().map(|plan| plan.descriptor.key.clone()).collect(),
        files,
        credentials: finalized.extraction.credentials,
        mappings: finalized.mappings,
        trace: finalized.extraction.trace,
    })
}
