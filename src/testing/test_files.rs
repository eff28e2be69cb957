//! Shared in-memory file backing store for test doubles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// In-memory file storage shared between a test and the double it seeds.
///
/// Tests keep a clone of the handle to inspect what production code wrote.
#[derive(Clone, Debug, Default)]
pub struct TestFiles {
    pub(crate) files: Arc<Mutex<HashMap<String, String>>>,
}

impl TestFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn add(&self, path: &str, content: &str) {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
    }

    /// Content of a file, if present.
    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    /// Parse a stored file as JSON.
    pub fn json(&self, path: &str) -> serde_json::Value {
        let content = self.get(path).unwrap_or_else(|| panic!("{} was not written", path));
        serde_json::from_str(&content).unwrap()
    }
}
