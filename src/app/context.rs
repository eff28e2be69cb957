use crate::domain::LabelTable;
use crate::ports::{ProjectFilesystem, ServiceCatalog, TemplateRenderer};

/// Application context holding dependencies for command execution.
pub struct AppContext<F: ProjectFilesystem, C: ServiceCatalog, T: TemplateRenderer> {
    project: F,
    catalog: C,
    templates: T,
    labels: LabelTable,
}

impl<F: ProjectFilesystem, C: ServiceCatalog, T: TemplateRenderer> AppContext<F, C, T> {
    /// Create a new application context.
    pub fn new(project: F, catalog: C, templates: T, labels: LabelTable) -> Self {
        Self { project, catalog, templates, labels }
    }

    /// Get a reference to the project filesystem.
    pub fn project(&self) -> &F {
        &self.project
    }

    /// Get a reference to the service catalog.
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Get a reference to the template renderer.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Label mapping table in effect for this run.
    pub fn labels(&self) -> &LabelTable {
        &self.labels
    }
}
