//! Credential stores and the extractor that regroups flat entries by instance.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::labels::{LabelTable, flat_key};
use super::service_config::{ServiceConfiguration, primary_instance_name};
use super::AppError;

/// Flat `<prefix>_<field>` -> value entries contributed by service writers.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatCredentialStore {
    entries: IndexMap<String, Value>,
}

impl FlatCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, AppError> {
        serde_json::from_str(content).map_err(|e| AppError::json(origin, e))
    }

    /// Insert an entry; a repeated key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Shallow merge, later entries overwrite earlier ones.
    pub fn extend(&mut self, other: FlatCredentialStore) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for FlatCredentialStore {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().map(|(key, value)| (key.into(), value)).collect() }
    }
}

/// Credentials of one service instance.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceCredentials {
    /// Scaffolder service key the instance was resolved through.
    pub service_key: String,
    /// Credential prefix the flat keys carried.
    pub prefix: String,
    pub fields: IndexMap<String, Value>,
}

/// Instance name -> credential record. Serializes as the record only.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InstanceCredentialStore {
    instances: IndexMap<String, InstanceCredentials>,
}

impl InstanceCredentialStore {
    pub fn get(&self, instance: &str) -> Option<&InstanceCredentials> {
        self.instances.get(instance)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &InstanceCredentials)> {
        self.instances.iter().map(|(name, credentials)| (name.as_str(), credentials))
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Rebuild the flat form by re-prefixing every field.
    pub fn to_flat(&self) -> FlatCredentialStore {
        self.instances
            .values()
            .flat_map(|instance| {
                instance
                    .fields
                    .iter()
                    .map(|(field, value)| (flat_key(&instance.prefix, field), value.clone()))
            })
            .collect()
    }
}

impl Serialize for InstanceCredentialStore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.instances.len()))?;
        for (name, instance) in &self.instances {
            map.serialize_entry(name, &instance.fields)?;
        }
        map.end()
    }
}

/// What happened to one flat key during extraction.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GroupingEvent {
    Grouped { key: String, prefix: String, instance: String, field: String },
    /// No label entry matched the key.
    Unrecognized { key: String },
    /// The prefix matched but the configuration has no binding for the service key.
    MissingMetadata { key: String, service_key: String },
    /// The resolved instance name is already owned by another prefix.
    InstanceConflict { key: String, instance: String, owner_prefix: String },
}

impl GroupingEvent {
    pub fn key(&self) -> &str {
        match self {
            GroupingEvent::Grouped { key, .. }
            | GroupingEvent::Unrecognized { key }
            | GroupingEvent::MissingMetadata { key, .. }
            | GroupingEvent::InstanceConflict { key, .. } => key,
        }
    }

    pub fn is_dropped(&self) -> bool {
        !matches!(self, GroupingEvent::Grouped { .. })
    }
}

/// Result of [`extract`]: the regrouped store plus a per-key trace.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub credentials: InstanceCredentialStore,
    pub trace: Vec<GroupingEvent>,
}

impl Extraction {
    pub fn dropped_keys(&self) -> impl Iterator<Item = &str> {
        self.trace.iter().filter(|event| event.is_dropped()).map(GroupingEvent::key)
    }
}

/// Regroup flat credential entries into per-instance records.
///
/// Keys are processed in store order. Each key is matched against `labels`
/// (first entry wins); the owning instance is resolved once per prefix from
/// `config`. Keys that cannot be attributed are dropped with a warning.
pub fn extract(
    flat: &FlatCredentialStore,
    labels: &LabelTable,
    config: &ServiceConfiguration,
) -> Extraction {
    let mut extraction = Extraction::default();
    // prefix -> resolved instance name, None when resolution failed
    let mut resolved: HashMap<String, Option<String>> = HashMap::new();

    if flat.is_empty() {
        debug!("No credentials to process");
        return extraction;
    }

    for (key, value) in flat.iter() {
        let Some((entry, field)) = labels.match_flat_key(key) else {
            warn!(key, "Could not find a label mapping for credential key; dropping it");
            extraction.trace.push(GroupingEvent::Unrecognized { key: key.to_string() });
            continue;
        };

        let instance = resolved
            .entry(entry.prefix.clone())
            .or_insert_with(|| {
                let name = primary_instance_name(config, &entry.key).map(String::from);
                debug!(prefix = %entry.prefix, service = %entry.key, instance = ?name, "Resolved instance");
                name
            })
            .clone();

        let Some(instance) = instance else {
            warn!(key, service = %entry.key, "No service metadata for credential key; dropping it");
            extraction.trace.push(GroupingEvent::MissingMetadata {
                key: key.to_string(),
                service_key: entry.key.clone(),
            });
            continue;
        };

        let record = extraction
            .credentials
            .instances
            .entry(instance.clone())
            .or_insert_with(|| InstanceCredentials {
                service_key: entry.key.clone(),
                prefix: entry.prefix.clone(),
                fields: IndexMap::new(),
            });

        if record.prefix != entry.prefix {
            warn!(
                key,
                instance = %instance,
                owner = %record.prefix,
                "Instance name already claimed by another service; dropping credential key"
            );
            extraction.trace.push(GroupingEvent::InstanceConflict {
                key: key.to_string(),
                instance,
                owner_prefix: record.prefix.clone(),
            });
            continue;
        }

        debug!(key, instance = %instance, field, "Grouped credential");
        record.fields.insert(field.to_string(), value.clone());
        extraction.trace.push(GroupingEvent::Grouped {
            key: key.to_string(),
            prefix: entry.prefix.clone(),
            instance,
            field: field.to_string(),
        });
    }

    extraction
}
