//! Service configuration: the declarative description of provisioned cloud services.
//!
//! The configuration is a JSON object keyed by scaffolder service key. A key
//! carries a service binding when its value is an object with a nested
//! `serviceInfo` object, or an array of such objects. Every other key
//! (`name`, `backendPlatform`, ...) is project metadata and is ignored here.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AppError;

const SERVICE_INFO_KEY: &str = "serviceInfo";

/// Metadata describing a provisioned service instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    /// User-visible, unique instance name.
    pub name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub plan: Option<String>,
    #[serde(default)]
    pub cloud_label: Option<String>,
}

/// One credential record of a binding, minus its `serviceInfo`.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingRecord {
    pub service_info: ServiceInfo,
    pub fields: Map<String, Value>,
}

/// All records configured for one service key.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceBinding {
    pub key: String,
    records: Vec<BindingRecord>,
}

impl ServiceBinding {
    pub fn records(&self) -> &[BindingRecord] {
        &self.records
    }

    /// The record generators act on. See [`primary_instance_name`].
    pub fn primary(&self) -> &BindingRecord {
        &self.records[0]
    }
}

/// Parsed service configuration, in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceConfiguration {
    bindings: Vec<ServiceBinding>,
}

impl ServiceConfiguration {
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, AppError> {
        let value: Value = serde_json::from_str(content).map_err(|e| AppError::json(origin, e))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, AppError> {
        let Value::Object(map) = value else {
            return Err(AppError::config_error("Service configuration must be a JSON object"));
        };

        let mut config = ServiceConfiguration::default();

        for (key, value) in map {
            if let Some(binding) = parse_binding(&key, value)? {
                config.bindings.push(binding);
            }
        }

        Ok(config)
    }

    pub fn bindings(&self) -> &[ServiceBinding] {
        &self.bindings
    }

    pub fn binding(&self, key: &str) -> Option<&ServiceBinding> {
        self.bindings.iter().find(|binding| binding.key == key)
    }
}

/// Instance name owning the credentials of `key`.
///
/// Array-valued bindings resolve to their first element only: every
/// instance after the first is ignored. Multi-instance support would start
/// by replacing this function.
pub fn primary_instance_name<'a>(config: &'a ServiceConfiguration, key: &str) -> Option<&'a str> {
    config.binding(key).map(|binding| binding.primary().service_info.name.as_str())
}

fn parse_binding(key: &str, value: Value) -> Result<Option<ServiceBinding>, AppError> {
    match value {
        Value::Object(map) if map.contains_key(SERVICE_INFO_KEY) => {
            let record = parse_record(key, map)?;
            Ok(Some(ServiceBinding { key: key.to_string(), records: vec![record] }))
        }
        Value::Array(items) if items.first().is_some_and(has_service_info) => {
            let records = items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => parse_record(key, map),
                    other => Err(AppError::InvalidServiceBinding {
                        service: key.to_string(),
                        reason: format!("array element must be an object, found {}", other),
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Some(ServiceBinding { key: key.to_string(), records }))
        }
        _ => Ok(None),
    }
}

fn has_service_info(value: &Value) -> bool {
    value.as_object().is_some_and(|map| map.contains_key(SERVICE_INFO_KEY))
}

fn parse_record(key: &str, mut map: Map<String, Value>) -> Result<BindingRecord, AppError> {
    let info = map.remove(SERVICE_INFO_KEY).ok_or_else(|| AppError::InvalidServiceBinding {
        service: key.to_string(),
        reason: "missing serviceInfo".to_string(),
    })?;

    let service_info: ServiceInfo =
        serde_json::from_value(info).map_err(|e| AppError::InvalidServiceBinding {
            service: key.to_string(),
            reason: format!("malformed serviceInfo: {}", e),
        })?;

    if service_info.name.trim().is_empty() {
        return Err(AppError::InvalidServiceBinding {
            service: key.to_string(),
            reason: "serviceInfo.name is empty".to_string(),
        });
    }

    Ok(BindingRecord { service_info, fields: map })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn collects_bindings_in_document_order() {
        let config = ServiceConfiguration::from_value(json!({
            "name": "acme",
            "backendPlatform": "SWIFT",
            "redis": { "uri": "redis://h:1234", "serviceInfo": { "name": "my-redis-db" } },
            "cloudant": [
                { "url": "https://a", "serviceInfo": { "name": "cloudant-a" } },
                { "url": "https://b", "serviceInfo": { "name": "cloudant-b" } }
            ]
        }))
        .unwrap();

        let keys: Vec<&str> = config.bindings().iter().map(|b| b.key.as_str()).collect();
        assert_eq!(keys, vec!["redis", "cloudant"]);

        let redis = config.binding("redis").unwrap();
        assert_eq!(redis.primary().fields.get("uri"), Some(&json!("redis://h:1234")));
        assert!(!redis.primary().fields.contains_key("serviceInfo"));
    }

    #[test]
    fn array_bindings_resolve_to_first_instance() {
        let config = ServiceConfiguration::from_value(json!({
            "cloudant": [
                { "serviceInfo": { "name": "cloudant-a" } },
                { "serviceInfo": { "name": "cloudant-b" } }
            ]
        }))
        .unwrap();

        assert_eq!(config.binding("cloudant").unwrap().records().len(), 2);
        assert_eq!(primary_instance_name(&config, "cloudant"), Some("cloudant-a"));
        assert_eq!(primary_instance_name(&config, "redis"), None);
    }

    #[test]
    fn ignores_values_without_service_info() {
        let config = ServiceConfiguration::from_value(json!({
            "server": { "host": "localhost" },
            "tags": [],
            "other": ["a", "b"]
        }))
        .unwrap();

        assert!(config.bindings().is_empty());
    }

    #[test]
    fn rejects_service_info_without_name() {
        let result = ServiceConfiguration::from_value(json!({
            "redis": { "serviceInfo": { "label": "compose-for-redis" } }
        }));

        assert!(matches!(
            result,
            Err(AppError::InvalidServiceBinding { ref service, .. }) if service == "redis"
        ));
    }

    #[test]
    fn rejects_non_object_configuration() {
        let result = ServiceConfiguration::from_json_str("[1, 2]", "bluemix.json");
        assert!(matches!(result, Err(AppError::Configuration(_))));

        let result = ServiceConfiguration::from_json_str("{ nope", "bluemix.json");
        assert!(matches!(result, Err(AppError::Json { .. })));
    }
}
