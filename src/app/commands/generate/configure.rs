//! Configure phase: resolve each selected binding into a service plan.

use tracing::warn;

use crate::domain::{AppError, LabelTable, ServiceBinding, ServiceDescriptor};
use crate::ports::ServiceCatalog;

/// Everything a service writer needs for one service.
#[derive(Debug, Clone)]
pub struct ServicePlan<'a> {
    pub descriptor: &'a ServiceDescriptor,
    pub binding: &'a ServiceBinding,
    /// Credential prefix, also the runtime lookup key.
    pub prefix: &'a str,
}

impl ServicePlan<'_> {
    pub fn instance_name(&self) -> &str {
        &self.binding.primary().service_info.name
    }
}

pub fn plan_services<'a, C: ServiceCatalog>(
    catalog: &'a C,
    labels: &'a LabelTable,
    selected: &[&'a ServiceBinding],
) -> Result<Vec<ServicePlan<'a>>, AppError> {
    selected
        .iter()
        .map(|binding| {
            let descriptor = catalog.get(&binding.key).ok_or_else(|| {
                AppError::config_error(format!("Service '{}' is not in the catalog", binding.key))
            })?;

            let prefix = labels.prefix_for(&binding.key).ok_or_else(|| {
                AppError::InvalidLabelTable(format!(
                    "no credential prefix for enabled service '{}'",
                    binding.key
                ))
            })?;

            if binding.records().len() > 1 {
                warn!(
                    service = %binding.key,
                    instance = %binding.primary().service_info.name,
                    ignored = binding.records().len() - 1,
                    "Multiple instances configured; only the first is scaffolded"
                );
            }

            Ok(ServicePlan { descriptor, binding, prefix })
        })
        .collect()
}
