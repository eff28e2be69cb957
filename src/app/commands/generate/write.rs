//! Write phase: one service writer per plan, run strictly in order.

use serde_json::json;
use tracing::{debug, info};

use crate::adapters::assets::{README_TEMPLATE, SERVICE_SOURCE_TEMPLATE};
use crate::app::AppContext;
use crate::domain::labels::flat_key;
use crate::domain::paths::{self, LOCALDEV_CONFIG_FILE};
use crate::domain::{AppError, ApplicationInjection, FlatCredentialStore, SearchPattern};
use crate::ports::{ParentContext, ProjectFilesystem, ServiceCatalog, TemplateRenderer};

use super::configure::ServicePlan;
use super::shared_files::{extend_flat_store, write_json};

/// Truncate the shared credential store before any writer appends to it.
pub fn reset_shared_store<F: ProjectFilesystem>(project: &F) -> Result<(), AppError> {
    write_json(project, LOCALDEV_CONFIG_FILE, &FlatCredentialStore::new())
}

/// Generate one service and return the files it wrote.
pub fn write_service<F, C, T, P>(
    ctx: &AppContext<F, C, T>,
    parent: &mut P,
    plan: &ServicePlan<'_>,
) -> Result<Vec<String>, AppError>
where
    F: ProjectFilesystem,
    C: ServiceCatalog,
    T: TemplateRenderer,
    P: ParentContext + ?Sized,
{
    let descriptor = plan.descriptor;
    let type_name = descriptor.type_name();
    let initializer = descriptor.initializer_name();
    let source_path = paths::service_source(&type_name);
    let readme_path = paths::service_readme(&descriptor.key);

    info!(service = %descriptor.key, instance = plan.instance_name(), "Generating service");

    for dependency in &descriptor.dependencies {
        parent.add_dependency(dependency)?;
    }

    let search_patterns: Vec<String> = SearchPattern::for_instance(plan.instance_name())
        .iter()
        .map(ToString::to_string)
        .collect();
    let template_ctx = json!({
        "service": descriptor,
        "type_name": type_name,
        "initializer": initializer,
        "lookup_key": plan.prefix,
        "instance": plan.instance_name(),
        "source_path": source_path,
        "search_patterns": search_patterns,
        "credentials": descriptor.credentials,
    });

    let source = ctx.templates().render(SERVICE_SOURCE_TEMPLATE, &template_ctx)?;
    ctx.project().write_file(&source_path, &source)?;

    if let Some(import) = &descriptor.import {
        parent.add_to_application(ApplicationInjection::ServiceImport(format!("import {}", import)))?;
    }
    parent.add_to_application(ApplicationInjection::ServiceVariable(format!(
        "public let {}: {}",
        descriptor.variable_name, descriptor.variable_type
    )))?;
    parent.add_to_application(ApplicationInjection::Service(format!(
        "{} = try {}(cloudEnv: cloudEnv)",
        descriptor.variable_name, initializer
    )))?;

    if let Some(module) = &descriptor.module {
        match parent.add_module(&format!("\"{}\"", module)) {
            Err(AppError::UnsupportedContext { .. }) => {
                debug!(service = %descriptor.key, module = %module, "Parent does not take modules; skipping");
            }
            other => other?,
        }
    }

    let readme = ctx.templates().render(README_TEMPLATE, &template_ctx)?;
    ctx.project().write_file(&readme_path, &readme)?;

    let record = plan.binding.primary();
    let mut credentials = FlatCredentialStore::new();
    for field in &descriptor.credentials {
        match record.fields.get(field) {
            Some(value) => credentials.insert(flat_key(plan.prefix, field), value.clone()),
            None => debug!(service = %descriptor.key, field = %field, "Credential field not in binding"),
        }
    }
    debug!(service = %descriptor.key, count = credentials.len(), "Appending flat credentials");
    extend_flat_store(ctx.project(), LOCALDEV_CONFIG_FILE, credentials)?;

    Ok(vec![source_path, readme_path])
}
