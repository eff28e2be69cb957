//! Services command: describe the embedded service catalog.

use serde::Serialize;

use crate::domain::LabelTable;
use crate::ports::ServiceCatalog;

/// One catalog row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceSummary {
    pub key: String,
    pub summary: String,
    /// Credential prefix from the active label table, if any.
    pub prefix: Option<String>,
    pub cloud_foundry_name: String,
    pub cloud_foundry_is_array: bool,
}

/// List every catalog service, sorted by key.
pub fn list<C: ServiceCatalog>(catalog: &C, labels: &LabelTable) -> Vec<ServiceSummary> {
    catalog
        .list_all()
        .into_iter()
        .map(|descriptor| ServiceSummary {
            key: descriptor.key.clone(),
            summary: descriptor.summary.clone(),
            prefix: labels.prefix_for(&descriptor.key).map(String::from),
            cloud_foundry_name: descriptor.cloud_foundry_name.clone(),
            cloud_foundry_is_array: descriptor.cloud_foundry_is_array,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{EmbeddedServiceCatalog, default_label_table};

    #[test]
    fn lists_catalog_with_default_prefixes() {
        let catalog = EmbeddedServiceCatalog::new().unwrap();
        let summaries = list(&catalog, &default_label_table().unwrap());

        assert_eq!(summaries.len(), 11);
        let auth = summaries.iter().find(|s| s.key == "auth").unwrap();
        assert_eq!(auth.prefix.as_deref(), Some("appid"));
        assert!(!auth.cloud_foundry_is_array);
        let keys: Vec<_> = summaries.iter().map(|s| s.key.as_str()).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn overridden_table_leaves_unlisted_services_without_prefix() {
        let catalog = EmbeddedServiceCatalog::new().unwrap();
        let labels = LabelTable::from_pairs([("redis", "cache")]).unwrap();

        let summaries = list(&catalog, &labels);

        let redis = summaries.iter().find(|s| s.key == "redis").unwrap();
        assert_eq!(redis.prefix.as_deref(), Some("cache"));
        assert!(summaries.iter().filter(|s| s.key != "redis").all(|s| s.prefix.is_none()));
    }
}
