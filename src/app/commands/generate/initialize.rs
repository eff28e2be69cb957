//! Initialize phase: pick the configured services svcgen has a generator for.

use tracing::debug;

use crate::domain::{ServiceBinding, ServiceConfiguration};
use crate::ports::ServiceCatalog;

/// Bindings with a catalog entry, in configuration order.
pub fn select_services<'a, C: ServiceCatalog>(
    catalog: &C,
    config: &'a ServiceConfiguration,
) -> Vec<&'a ServiceBinding> {
    config
        .bindings()
        .iter()
        .filter(|binding| {
            let known = catalog.get(&binding.key).is_some();
            if !known {
                debug!(service = %binding.key, "No generator for configured service; skipping");
            }
            known
        })
        .collect()
}
