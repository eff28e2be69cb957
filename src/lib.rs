//! svcgen: scaffold Kitura cloud services and their credential mappings.
//!
//! Each enabled service contributes a Swift initializer, a README and
//! flat `<prefix>_<field>` credentials. Once every service is written the
//! flat credentials are regrouped per bound instance and
//! `config/mappings.json` is emitted with the search patterns the runtime
//! uses to find them.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    GenerateOutcome, GenerationReport, ServiceSummary, generate, generate_at,
    generate_standalone_at, remap_at, services, services_at,
};
pub use domain::{
    AccessPatternMap, AppError, FlatCredentialStore, InstanceCredentialStore, LabelTable,
    ServiceConfiguration, emit, extract,
};
