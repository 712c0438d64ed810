//! In-process [`LocalStorage`] backed by a hash map. Nothing survives a restart.

use std::collections::HashMap;
use std::sync::Mutex;

use tutorhub_domain::error::TutorHubError;

use crate::ports::LocalStorage;
use crate::store::lock;

#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, TutorHubError> {
        Ok(lock(&self.items).get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), TutorHubError> {
        lock(&self.items).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), TutorHubError> {
        lock(&self.items).remove(key);
        Ok(())
    }
}
