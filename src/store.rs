use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Outcome of a store operation that did not apply
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("key already exists: {0}")]
    AlreadyExists(String),
    #[error("key not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Shareable in-memory key-value store
///
/// Keys map to raw JSON text, kept exactly as the client sent it. Every
/// operation runs under a single lock, so a create's existence check and
/// insert can never interleave with another writer.
#[derive(Clone, Default)]
pub struct KvStore {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl KvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new entry
    ///
    /// # Errors
    /// Returns `StoreError::AlreadyExists` if `key` is present; the stored
    /// value is left untouched.
    pub fn create(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.inner.write();

        if entries.contains_key(key) {
            tracing::debug!("Create rejected, key exists: {}", key);
            return Err(StoreError::AlreadyExists(key.to_string()));
        }

        entries.insert(key.to_string(), value);
        tracing::debug!("Created entry with key: {}", key);
        Ok(())
    }

    /// Read the stored value for `key`
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if `key` is absent
    pub fn get(&self, key: &str) -> Result<String> {
        self.inner
            .read()
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }

    /// Replace the value of an existing entry. Never inserts.
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if `key` is absent
    pub fn update(&self, key: &str, value: String) -> Result<()> {
        let mut entries = self.inner.write();

        match entries.get_mut(key) {
            Some(slot) => {
                *slot = value;
                tracing::debug!("Updated entry with key: {}", key);
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    /// Remove the entry for `key`
    ///
    /// # Errors
    /// Returns `StoreError::NotFound` if `key` is absent
    pub fn delete(&self, key: &str) -> Result<()> {
        match self.inner.write().remove(key) {
            Some(_) => {
                tracing::debug!("Deleted entry with key: {}", key);
                Ok(())
            }
            None => Err(StoreError::NotFound(key.to_string())),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
