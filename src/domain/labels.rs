//! Label mapping table: scaffolder service key -> credential prefix.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::AppError;

/// Separator between a credential prefix and the field name in flat keys.
pub const CREDENTIAL_SEPARATOR: char = '_';

/// One row of the label mapping table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelEntry {
    /// Scaffolder service key, e.g. `auth`.
    pub key: String,
    /// Credential prefix used in flat credential keys, e.g. `appid`.
    pub prefix: String,
}

impl LabelEntry {
    pub fn new(key: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self { key: key.into(), prefix: prefix.into() }
    }
}

/// Ordered lookup from service key to credential prefix.
///
/// Order is significant: flat credential keys are matched against entries
/// front to back and the first hit wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelTable {
    entries: Vec<LabelEntry>,
}

impl LabelTable {
    /// Build a table, rejecting empty fields and duplicate service keys.
    pub fn new(entries: Vec<LabelEntry>) -> Result<Self, AppError> {
        for (index, entry) in entries.iter().enumerate() {
            if entry.key.trim().is_empty() || entry.prefix.trim().is_empty() {
                return Err(AppError::InvalidLabelTable(format!(
                    "entry {} has an empty key or prefix",
                    index
                )));
            }
            if entries[..index].iter().any(|earlier| earlier.key == entry.key) {
                return Err(AppError::InvalidLabelTable(format!(
                    "service key '{}' is listed more than once",
                    entry.key
                )));
            }
        }
        Ok(Self { entries })
    }

    /// Convenience constructor for `(key, prefix)` pairs.
    pub fn from_pairs<I, K, P>(pairs: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = (K, P)>,
        K: Into<String>,
        P: Into<String>,
    {
        Self::new(pairs.into_iter().map(|(key, prefix)| LabelEntry::new(key, prefix)).collect())
    }

    /// Parse a JSON object of `{ "<key>": "<prefix>" }`, keeping document order.
    pub fn from_json_str(content: &str, origin: &str) -> Result<Self, AppError> {
        let map: Map<String, Value> =
            serde_json::from_str(content).map_err(|e| AppError::json(origin, e))?;

        let mut entries = Vec::with_capacity(map.len());
        for (key, value) in map {
            let prefix = value.as_str().ok_or_else(|| {
                AppError::InvalidLabelTable(format!("prefix for '{}' must be a string", key))
            })?;
            entries.push(LabelEntry::new(key, prefix));
        }
        Self::new(entries)
    }

    pub fn entries(&self) -> &[LabelEntry] {
        &self.entries
    }

    /// Credential prefix registered for a service key.
    pub fn prefix_for(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|entry| entry.key == key).map(|entry| entry.prefix.as_str())
    }

    pub fn contains_prefix(&self, prefix: &str) -> bool {
        self.entries.iter().any(|entry| entry.prefix == prefix)
    }

    /// First entry whose `prefix + "_"` starts `flat_key`.
    ///
    /// Returns the entry together with the field name left after stripping.
    /// A key that leaves an empty field under its first match is unrecognized;
    /// later entries are not consulted.
    pub fn match_flat_key<'a, 'k>(&'a self, flat_key: &'k str) -> Option<(&'a LabelEntry, &'k str)> {
        let (entry, field) = self.entries.iter().find_map(|entry| {
            let field = flat_key
                .strip_prefix(entry.prefix.as_str())?
                .strip_prefix(CREDENTIAL_SEPARATOR)?;
            Some((entry, field))
        })?;
        (!field.is_empty()).then_some((entry, field))
    }
}

/// Join a prefix and field into a flat credential key.
pub fn flat_key(prefix: &str, field: &str) -> String {
    format!("{}{}{}", prefix, CREDENTIAL_SEPARATOR, field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> LabelTable {
        LabelTable::from_pairs([("auth", "appid"), ("redis", "redis"), ("push", "push")]).unwrap()
    }

    #[test]
    fn prefix_lookup_by_service_key() {
        let table = table();
        assert_eq!(table.prefix_for("auth"), Some("appid"));
        assert_eq!(table.prefix_for("cloudant"), None);
    }

    #[test]
    fn match_requires_separator_after_prefix() {
        let table = table();

        let (entry, field) = table.match_flat_key("appid_tenantId").unwrap();
        assert_eq!(entry.key, "auth");
        assert_eq!(field, "tenantId");

        assert!(table.match_flat_key("appidtenantId").is_none());
        assert!(table.match_flat_key("pushy_url").is_none());
        assert!(table.match_flat_key("redis_").is_none());
    }

    #[test]
    fn first_entry_in_table_order_wins() {
        let table =
            LabelTable::from_pairs([("conversation", "watson"), ("speech", "watson_speech")])
                .unwrap();

        let (entry, field) = table.match_flat_key("watson_speech_url").unwrap();
        assert_eq!(entry.key, "conversation");
        assert_eq!(field, "speech_url");
    }

    #[test]
    fn empty_field_under_first_match_does_not_fall_through() {
        let table = LabelTable::from_pairs([("long", "a_b"), ("short", "a")]).unwrap();

        assert!(table.match_flat_key("a_b_").is_none());

        let (entry, field) = table.match_flat_key("a_c").unwrap();
        assert_eq!(entry.key, "short");
        assert_eq!(field, "c");
    }

    #[test]
    fn rejects_duplicate_keys_and_empty_prefixes() {
        let duplicate = LabelTable::from_pairs([("redis", "redis"), ("redis", "other")]);
        assert!(matches!(duplicate, Err(AppError::InvalidLabelTable(_))));

        let empty = LabelTable::from_pairs([("redis", " ")]);
        assert!(matches!(empty, Err(AppError::InvalidLabelTable(_))));
    }

    #[test]
    fn json_table_keeps_document_order() {
        let table = LabelTable::from_json_str(
            r#"{ "redis": "redis", "auth": "appid", "cloudant": "cloudant" }"#,
            "labels.json",
        )
        .unwrap();

        let keys: Vec<&str> = table.entries().iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["redis", "auth", "cloudant"]);
    }

    #[test]
    fn json_table_rejects_non_string_prefix() {
        let result = LabelTable::from_json_str(r#"{ "redis": 3 }"#, "labels.json");
        assert!(matches!(result, Err(AppError::InvalidLabelTable(_))));
    }
}
