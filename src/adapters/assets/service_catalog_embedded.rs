//! Service catalog loaded from embedded assets.
//!
//! Each service lives in `src/assets/services/<key>/` with a `meta.toml`
//! descriptor and a `dependencies.txt` listing Swift package lines.

use include_dir::{Dir, include_dir};
use serde::Deserialize;
use std::collections::BTreeMap;

use crate::domain::{AppError, ServiceDescriptor};
use crate::ports::ServiceCatalog;

/// Embedded service directory.
static SERVICES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/src/assets/services");

/// Metadata parsed from meta.toml.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ServiceMeta {
    /// Service key (defaults to directory name if missing).
    key: Option<String>,
    #[serde(default)]
    summary: String,
    cloud_foundry_name: String,
    #[serde(default)]
    custom_service_key: Option<String>,
    #[serde(default)]
    cloud_foundry_is_array: bool,
    #[serde(default = "default_mapping_version")]
    mapping_version: u32,
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    import: Option<String>,
    variable_name: String,
    variable_type: String,
    #[serde(default)]
    credentials: Vec<String>,
}

fn default_mapping_version() -> u32 {
    1
}

/// Catalog of the services svcgen can scaffold.
pub struct EmbeddedServiceCatalog {
    services: BTreeMap<String, ServiceDescriptor>,
}

impl EmbeddedServiceCatalog {
    /// Create a new catalog by loading all embedded service descriptors.
    pub fn new() -> Result<Self, AppError> {
        let mut services = BTreeMap::new();

        for entry in SERVICES_DIR.dirs() {
            let dir_name = entry.path().file_name().and_then(|n| n.to_str()).unwrap_or("");

            let Some(meta_file) = entry.get_file(entry.path().join("meta.toml")) else {
                continue;
            };

            let invalid = |reason: String| AppError::InvalidServiceCatalog {
                service: dir_name.to_string(),
                reason,
            };

            let meta_content = meta_file
                .contents_utf8()
                .ok_or_else(|| invalid("meta.toml is not valid UTF-8".to_string()))?;
            let meta: ServiceMeta =
                toml::from_str(meta_content).map_err(|e| invalid(e.to_string()))?;

            let dependencies = match entry.get_file(entry.path().join("dependencies.txt")) {
                Some(file) => file
                    .contents_utf8()
                    .ok_or_else(|| invalid("dependencies.txt is not valid UTF-8".to_string()))?
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from)
                    .collect(),
                None => Vec::new(),
            };

            if meta.variable_name.trim().is_empty() || meta.variable_type.trim().is_empty() {
                return Err(invalid("variable_name and variable_type are required".to_string()));
            }

            let descriptor = ServiceDescriptor {
                key: meta.key.unwrap_or_else(|| dir_name.to_string()),
                summary: meta.summary,
                cloud_foundry_name: meta.cloud_foundry_name,
                custom_service_key: meta.custom_service_key,
                cloud_foundry_is_array: meta.cloud_foundry_is_array,
                mapping_version: meta.mapping_version,
                dependencies,
                module: meta.module.filter(|m| !m.is_empty()),
                import: meta.import.filter(|i| !i.is_empty()),
                variable_name: meta.variable_name,
                variable_type: meta.variable_type,
                credentials: meta.credentials,
            };

            services.insert(descriptor.key.clone(), descriptor);
        }

        Ok(Self { services })
    }
}

impl ServiceCatalog for EmbeddedServiceCatalog {
    fn get(&self, key: &str) -> Option<&ServiceDescriptor> {
        self.services.get(key)
    }

    fn list_all(&self) -> Vec<&ServiceDescriptor> {
        self.services.values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::assets::default_label_table;

    #[test]
    fn loads_embedded_services() {
        let catalog = EmbeddedServiceCatalog::new().unwrap();

        let redis = catalog.get("redis").expect("redis should be embedded");
        assert_eq!(redis.cloud_foundry_name, "compose-for-redis");
        assert_eq!(redis.credentials, vec!["uri"]);
        assert_eq!(redis.module.as_deref(), Some("SwiftRedis"));
        assert!(redis.dependencies[0].contains("Kitura-redis"));

        let speech = catalog.get("speechToText").unwrap();
        assert_eq!(speech.custom_service_key.as_deref(), Some("watson-speech-to-text"));
        assert_eq!(speech.mapping_version, 2);
    }

    #[test]
    fn list_is_sorted_by_key() {
        let catalog = EmbeddedServiceCatalog::new().unwrap();
        let keys: Vec<&str> = catalog.list_all().iter().map(|s| s.key.as_str()).collect();

        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn every_service_has_a_label() {
        let catalog = EmbeddedServiceCatalog::new().unwrap();
        let labels = default_label_table().unwrap();

        for service in catalog.list_all() {
            assert!(labels.prefix_for(&service.key).is_some(), "no label for {}", service.key);
        }
    }
}
