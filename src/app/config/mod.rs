//! Generator configuration loading from the project root.

use crate::domain::config::parse_config_content;
use crate::domain::paths::CONFIG_FILE;
use crate::domain::{AppError, GeneratorConfig};
use crate::ports::ProjectFilesystem;

/// Load `.svcgen.toml`, falling back to defaults when the file is absent.
pub fn load_config<F: ProjectFilesystem>(project: &F) -> Result<GeneratorConfig, AppError> {
    if !project.file_exists(CONFIG_FILE) {
        return Ok(GeneratorConfig::default());
    }

    let content = project.read_file(CONFIG_FILE)?;
    parse_config_content(&content).map_err(|e| match e {
        AppError::TomlParseError(inner) => {
            AppError::config_error(format!("Invalid {}: {}", CONFIG_FILE, inner))
        }
        other => other,
    })
}
