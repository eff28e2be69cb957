//! Service catalog port definition.

use crate::domain::ServiceDescriptor;

/// Trait for accessing the supported-service catalog.
pub trait ServiceCatalog {
    /// Get a service by scaffolder key.
    fn get(&self, key: &str) -> Option<&ServiceDescriptor>;

    /// List all services sorted by key.
    fn list_all(&self) -> Vec<&ServiceDescriptor>;
}
