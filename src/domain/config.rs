//! Generator configuration (`.svcgen.toml`).

use serde::Deserialize;

use super::AppError;
use super::labels::{LabelEntry, LabelTable};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Default log level when none is given on the command line.
    #[serde(default)]
    pub log_level: Option<String>,
    /// Replacement label table, in match order.
    #[serde(default)]
    pub labels: Option<Vec<LabelEntry>>,
}

impl GeneratorConfig {
    /// Label table to use: the configured one, or `default` when absent.
    pub fn label_table(&self, default: LabelTable) -> Result<LabelTable, AppError> {
        match &self.labels {
            Some(entries) => LabelTable::new(entries.clone()),
            None => Ok(default),
        }
    }
}

/// Parse and validate generator configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<GeneratorConfig, AppError> {
    let config: GeneratorConfig = toml::from_str(content)?;
    if let Some(labels) = &config.labels {
        if labels.is_empty() {
            return Err(AppError::config_error(
                "`labels` must list at least one entry when present",
            ));
        }
        LabelTable::new(labels.clone())?;
    }
    Ok(config)
}
