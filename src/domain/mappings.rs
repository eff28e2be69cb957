//! Access-pattern metadata consumed by the runtime credential resolver.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::credentials::InstanceCredentialStore;
use super::labels::LabelTable;
use super::paths::LOCALDEV_CONFIG_FILE;

/// Where the runtime resolver looks for a credential value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPattern {
    /// Cloud Foundry `VCAP_SERVICES` entry, keyed by instance name.
    CloudFoundry(String),
    /// Environment variable name.
    Env(String),
    /// Entry in the local development config, keyed by instance name.
    File(String),
}

impl SearchPattern {
    /// The three lookups for an instance, in resolution order.
    pub fn for_instance(instance: &str) -> [SearchPattern; 3] {
        [
            SearchPattern::CloudFoundry(instance.to_string()),
            SearchPattern::Env(env_variable_name(instance)),
            SearchPattern::File(instance.to_string()),
        ]
    }
}

impl fmt::Display for SearchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchPattern::CloudFoundry(name) => write!(f, "cloudfoundry:{}", name),
            SearchPattern::Env(name) => write!(f, "env:{}", name),
            SearchPattern::File(name) => write!(f, "file:/{}:{}", LOCALDEV_CONFIG_FILE, name),
        }
    }
}

/// Environment variables cannot carry `-`.
pub fn env_variable_name(instance: &str) -> String {
    instance.replace('-', "_")
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialLookup {
    #[serde(rename = "searchPatterns")]
    pub search_patterns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPattern {
    pub credentials: CredentialLookup,
}

/// Credential prefix -> lookup strategies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessPatternMap {
    entries: IndexMap<String, AccessPattern>,
}

impl AccessPatternMap {
    pub fn get(&self, prefix: &str) -> Option<&AccessPattern> {
        self.entries.get(prefix)
    }

    pub fn prefixes(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derive one access-pattern entry per credential prefix.
///
/// Instances sharing a prefix fold into a single entry and the last one
/// processed wins. Instances whose prefix is no longer in `labels` are skipped.
pub fn emit(credentials: &InstanceCredentialStore, labels: &LabelTable) -> AccessPatternMap {
    let mut map = AccessPatternMap::default();

    for (instance, record) in credentials.iter() {
        if !labels.contains_prefix(&record.prefix) {
            debug!(instance, prefix = %record.prefix, "Skipping instance with unknown prefix");
            continue;
        }

        let search_patterns =
            SearchPattern::for_instance(instance).iter().map(ToString::to_string).collect();
        map.entries.insert(
            record.prefix.clone(),
            AccessPattern { credentials: CredentialLookup { search_patterns } },
        );
    }

    map
}
