use serde_json::Value;

use crate::domain::AppError;

/// Trait for rendering named templates.
///
/// Keeps the template engine (minijinja) out of the orchestration code.
pub trait TemplateRenderer {
    /// Render the template registered as `template_name` with `context`.
    fn render(&self, template_name: &str, context: &Value) -> Result<String, AppError>;
}
