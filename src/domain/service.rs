//! Static description of a supported cloud service.

use serde::Serialize;

/// Per-service generator metadata loaded from the service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceDescriptor {
    /// Scaffolder service key, e.g. `objectStorage`.
    pub key: String,
    pub summary: String,
    /// Cloud Foundry service offering name.
    pub cloud_foundry_name: String,
    /// Catalog key used by newer mapping versions.
    pub custom_service_key: Option<String>,
    /// Whether `VCAP_SERVICES` delivers this offering as an array.
    pub cloud_foundry_is_array: bool,
    /// Credential mapping format version, shown in the service README.
    pub mapping_version: u32,
    /// Swift package dependency lines, one per entry.
    pub dependencies: Vec<String>,
    /// Module added to the package target, if any.
    pub module: Option<String>,
    /// Module imported by `Application.swift`, if any.
    pub import: Option<String>,
    /// Name of the application property holding the client.
    pub variable_name: String,
    /// Swift type of that property.
    pub variable_type: String,
    /// Credential fields the service's credentials schema defines.
    pub credentials: Vec<String>,
}

impl ServiceDescriptor {
    /// `Service<PascalKey>`, shared by the source file and its initializer.
    pub fn type_name(&self) -> String {
        format!("Service{}", pascalize(&self.key))
    }

    pub fn initializer_name(&self) -> String {
        format!("initialize{}", self.type_name())
    }
}

/// Upper-case the first letter and the letter after each hyphen, dropping hyphens.
pub fn pascalize(name: &str) -> String {
    name.split('-')
        .filter(|segment| !segment.is_empty())
        .map(|segment| {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
