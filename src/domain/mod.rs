pub mod config;
pub mod context;
pub mod credentials;
pub mod error;
pub mod gitignore;
pub mod labels;
pub mod mappings;
pub mod paths;
pub mod service;
pub mod service_config;

pub use config::GeneratorConfig;
pub use context::{ApplicationInjection, Capability};
pub use credentials::{
    Extraction, FlatCredentialStore, GroupingEvent, InstanceCredentialStore, InstanceCredentials,
    extract,
};
pub use error::AppError;
pub use labels::{LabelEntry, LabelTable};
pub use mappings::{AccessPatternMap, SearchPattern, emit};
pub use service::ServiceDescriptor;
pub use service_config::{ServiceBinding, ServiceConfiguration, primary_instance_name};
