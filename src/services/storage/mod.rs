//! Durable key-value storage behind the settings cache.
//!
//! Backends store raw JSON text under flat string keys, the way a browser's
//! `localStorage` does. [`SqliteStorage`] is the durable medium and
//! [`MemoryStorage`] stands in for it in tests and restricted environments.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use thiserror::Error;

/// Default capacity of a store, matching the usual browser budget.
pub const DEFAULT_QUOTA_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage quota exceeded: {needed} bytes needed, quota is {quota} bytes")]
    QuotaExceeded { needed: usize, quota: usize },
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Capability the settings cache needs from a durable store.
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend {
    /// Raw stored text for `key`, or `None` when the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: StorageBackend + ?Sized> StorageBackend for Box<T> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Bytes an entry occupies against the quota.
pub(crate) fn entry_size(key: &str, value: &str) -> usize {
    key.len() + value.len()
}

/// Fails with `QuotaExceeded` when writing an entry of `entry` bytes on top of
/// `used` bytes would overflow `quota`.
pub(crate) fn check_quota(used: usize, entry: usize, quota: Option<usize>) -> Result<(), StorageError> {
    match quota {
        Some(quota) if used + entry > quota => Err(StorageError::QuotaExceeded {
            needed: used + entry,
            quota,
        }),
        _ => Ok(()),
    }
}
