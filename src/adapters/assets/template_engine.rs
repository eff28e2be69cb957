use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment};
use serde_json::Value;

use crate::domain::AppError;
use crate::ports::TemplateRenderer;

static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

pub const SERVICE_SOURCE_TEMPLATE: &str = "service.swift.j2";
pub const README_TEMPLATE: &str = "README.md.j2";

/// minijinja environment preloaded with the embedded templates.
pub struct EmbeddedTemplates {
    env: Environment<'static>,
}

impl EmbeddedTemplates {
    pub fn new() -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        for file in TEMPLATES_DIR.files() {
            let Some(name) = file.path().to_str() else {
                continue;
            };
            let content = file.contents_utf8().ok_or_else(|| {
                AppError::Template(format!("Template '{}' is not valid UTF-8", name))
            })?;
            env.add_template(name, content).map_err(|e| {
                AppError::Template(format!("Failed to register template '{}': {}", name, e))
            })?;
        }

        Ok(Self { env })
    }
}

impl TemplateRenderer for EmbeddedTemplates {
    fn render(&self, template_name: &str, context: &Value) -> Result<String, AppError> {
        let template = self.env.get_template(template_name).map_err(|e| {
            AppError::Template(format!("Failed to load template '{}': {}", template_name, e))
        })?;

        template.render(context).map_err(|e| {
            AppError::Template(format!("Failed to render template '{}': {}", template_name, e))
        })
    }
}
