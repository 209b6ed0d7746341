use std::collections::HashMap;

use super::{check_quota, entry_size, StorageBackend, StorageError};

/// In-process store. Contents are lost when it is dropped.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
    quota: Option<usize>,
    available: bool,
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            quota: None,
            available: true,
        }
    }

    /// A store that rejects every operation, like storage disabled by the
    /// host environment.
    pub fn disabled() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = Some(quota);
        self
    }

    pub fn set_available(&mut self, available: bool) {
        self.available = available;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn usage_bytes(&self) -> usize {
        self.items.iter().map(|(k, v)| entry_size(k, v)).sum()
    }

    /// Writes raw text without quota checks, for seeding test fixtures.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.items.insert(key.into(), value.into());
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if !self.available {
            return Err(StorageError::Unavailable);
        }
        let existing = self.items.get(key).map(|v| entry_size(key, v)).unwrap_or(0);
        let used = self.usage_bytes() - existing;
        check_quota(used, entry_size(key, value), self.quota)?;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
