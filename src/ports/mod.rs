mod parent_context;
mod project_filesystem;
mod service_catalog;
mod template_renderer;

pub use parent_context::ParentContext;
pub use project_filesystem::ProjectFilesystem;
pub use service_catalog::ServiceCatalog;
pub use template_renderer::TemplateRenderer;
