use std::collections::{HashMap, HashSet};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::services::storage::StorageBackend;

/// What happened to a value handed to [`SettingsCache::write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Stored durably and in memory.
    Persisted,
    /// Kept in memory for this session only; the store refused it.
    MemoryOnly,
    /// The value could not be serialized; nothing changed.
    Rejected,
}

/// Typed key-value cache over a [`StorageBackend`].
///
/// Values are JSON encoded on the way in and decoded on the way out. Every
/// value read or written is materialized in memory, so a session keeps
/// working with its latest values even when the store is missing, corrupt or
/// full. Reads and writes never fail; problems are logged and degrade to the
/// caller's default.
pub struct SettingsCache<S: StorageBackend> {
    storage: S,
    values: HashMap<String, Value>,
    unpersisted: HashSet<String>,
    /// Stored values that parsed as JSON but did not decode as the type
    /// they were read as.
    rejected: HashMap<String, Value>,
}

impl<S: StorageBackend> SettingsCache<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            values: HashMap::new(),
            unpersisted: HashSet::new(),
            rejected: HashMap::new(),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Current value for `key`, falling back to `default` when the key is
    /// absent, the store is unavailable, or the stored text does not decode
    /// as `T`.
    pub fn read<T>(&mut self, key: &str, default: T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        if let Some(value) = self.values.get(key) {
            match serde_json::from_value(value.clone()) {
                Ok(decoded) => return decoded,
                Err(err) => log::warn!("Cached value for \"{}\" has an unexpected shape: {}", key, err),
            }
        }

        let value = match self.load_stored(key) {
            Some(stored) => match decode(key, stored.clone()) {
                Some(decoded) => {
                    self.rejected.remove(key);
                    decoded
                }
                None => {
                    self.rejected.insert(key.to_string(), stored);
                    default
                }
            },
            None => default,
        };
        self.materialize(key, &value);
        value
    }

    /// Stores `value` under `key`.
    ///
    /// The in-memory value always updates once the value serializes; a store
    /// failure only means the value will not survive a reload.
    pub fn write<T>(&mut self, key: &str, value: &T) -> WriteOutcome
    where
        T: Serialize + ?Sized,
    {
        let encoded = match serde_json::to_value(value) {
            Ok(encoded) => encoded,
            Err(err) => {
                log::warn!("Error setting storage key \"{}\": {}", key, err);
                return WriteOutcome::Rejected;
            }
        };

        let raw = encoded.to_string();
        self.values.insert(key.to_string(), encoded);
        self.rejected.remove(key);

        match self.storage.set_item(key, &raw) {
            Ok(()) => {
                self.unpersisted.remove(key);
                WriteOutcome::Persisted
            }
            Err(err) => {
                log::warn!("Error setting storage key \"{}\": {}", key, err);
                self.unpersisted.insert(key.to_string());
                WriteOutcome::MemoryOnly
            }
        }
    }

    /// Derives the new value from the current one and writes it.
    ///
    /// The current value is the materialized one, so several updates in a
    /// row compose instead of each starting from a stale copy.
    pub fn update<T, F>(&mut self, key: &str, default: T, f: F) -> (T, WriteOutcome)
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(T) -> T,
    {
        let current = self.read(key, default);
        let next = f(current);
        let outcome = self.write(key, &next);
        (next, outcome)
    }

    /// Re-reads the store for every materialized key and adopts stored values
    /// that differ from memory. Keys with a write the store refused keep
    /// their in-memory value, and a stored value that already failed to
    /// decode is not adopted again.
    ///
    /// Run once after initialization so a store that became available after
    /// the first reads is not ignored. Returns the number of values adopted.
    pub fn synchronize(&mut self) -> usize {
        let keys: Vec<String> = self
            .values
            .keys()
            .filter(|key| !self.unpersisted.contains(*key))
            .cloned()
            .collect();

        let mut adopted = 0;
        for key in keys {
            if let Some(stored) = self.load_stored(&key) {
                if self.rejected.get(&key) == Some(&stored) {
                    continue;
                }
                if self.values.get(&key) != Some(&stored) {
                    log::debug!("Adopting stored value for \"{}\"", key);
                    self.values.insert(key, stored);
                    adopted += 1;
                }
            }
        }

        log::info!("Settings cache synchronized ({} value(s) adopted from storage)", adopted);
        adopted
    }

    /// Whether the last write for `key` reached the store.
    pub fn is_persisted(&self, key: &str) -> bool {
        !self.unpersisted.contains(key)
    }

    fn load_stored(&self, key: &str) -> Option<Value> {
        match self.storage.get_item(key) {
            Ok(Some(raw)) if raw.is_empty() => None,
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(err) => {
                    log::warn!("Error reading storage key \"{}\": {}", key, err);
                    None
                }
            },
            Ok(None) => None,
            Err(err) => {
                log::warn!("Error reading storage key \"{}\": {}", key, err);
                None
            }
        }
    }

    fn materialize<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_value(value) {
            Ok(encoded) => {
                self.values.insert(key.to_string(), encoded);
            }
            Err(err) => log::debug!("Not caching \"{}\": {}", key, err),
        }
    }
}

fn decode<T: DeserializeOwned>(key: &str, value: Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(decoded) => Some(decoded),
        Err(err) => {
            log::warn!("Error decoding storage key \"{}\": {}", key, err);
            None
        }
    }
}
