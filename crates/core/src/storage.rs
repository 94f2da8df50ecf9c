//! Durable client-storage boundary.
//!
//! The shell persists small string values (selected language, theme id,
//! system-preference mode) to whatever key/value storage the host provides.
//! Storage is best-effort and never authoritative for the running session:
//! every call site wraps failures defensively and continues in-memory.

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage exists but rejected the operation (quota, disabled, etc).
    #[error("storage rejected access to key '{0}'")]
    Rejected(String),

    /// Internal lock poisoning.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Simple string key/value storage contract.
///
/// Mirrors the shape of browser `localStorage`: synchronous-looking get /
/// set / remove, any of which may fail. Callers must treat failures as
/// no-ops, never as crashes.
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory storage for tests/dev and single-process hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value before handing the storage to a store under test.
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        self
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

/// Storage stand-in for contexts with no durable storage at all.
///
/// Reads always miss, writes succeed and discard. Rehydration against this
/// storage yields defaults.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStorage;

impl KeyValueStorage for NullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Ok(())
    }
}
