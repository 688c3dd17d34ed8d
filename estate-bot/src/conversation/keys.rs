//! Opaque keys for building labels.
//!
//! Building names can be long or contain `:`; buttons carry a generated key instead and the
//! session maps it back. Keys live as long as the search context that created them.

use std::collections::HashMap;

use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct GroupKeys {
    label_by_key: HashMap<String, String>,
    key_by_label: HashMap<String, String>,
}

impl GroupKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the key for `label`, generating one on first use.
    pub fn register(&mut self, label: &str) -> String {
        if let Some(key) = self.key_by_label.get(label) {
            return key.clone();
        }
        let key = Uuid::new_v4().simple().to_string();
        self.label_by_key.insert(key.clone(), label.to_string());
        self.key_by_label.insert(label.to_string(), key.clone());
        key
    }

    pub fn label(&self, key: &str) -> Option<&str> {
        self.label_by_key.get(key).map(String::as_str)
    }

    pub fn key(&self, label: &str) -> Option<&str> {
        self.key_by_label.get(label).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.label_by_key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.label_by_key.is_empty()
    }
}
