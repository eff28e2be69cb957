//! Project-relative output locations.

/// Credential search-pattern metadata.
pub const MAPPINGS_FILE: &str = "config/mappings.json";

/// Shared credential store; flat during writing, per-instance afterwards.
pub const LOCALDEV_CONFIG_FILE: &str = "config/localdev-config.json";

pub const GITIGNORE_FILE: &str = ".gitignore";

/// Optional generator configuration at the project root.
pub const CONFIG_FILE: &str = ".svcgen.toml";

pub const SERVICES_SOURCE_DIR: &str = "Sources/Application/Services";

pub const SERVICES_DOCS_DIR: &str = "docs/services";

/// `Sources/Application/Services/<TypeName>.swift`
pub fn service_source(type_name: &str) -> String {
    format!("{}/{}.swift", SERVICES_SOURCE_DIR, type_name)
}

/// `docs/services/README-<key>.md`
pub fn service_readme(service_key: &str) -> String {
    format!("{}/README-{}.md", SERVICES_DOCS_DIR, service_key)
}
