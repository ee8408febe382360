//! Store implementation
//!
//! HashMap-based store behind a single parking_lot RwLock.

use std::collections::hash_map::Entry as Slot;
use std::collections::HashMap;
use std::path::Path;

use bytes::Bytes;
use parking_lot::RwLock;

use super::Entry;
use crate::error::{CacheError, Result};
use crate::snapshot;

/// Thread-safe key/value store
///
/// Cloning is not supported; share it behind an `Arc`.
#[derive(Debug, Default)]
pub struct Store {
    entries: RwLock<HashMap<String, Bytes>>,
}

impl Store {
    /// Create a new empty Store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new key (write lock)
    ///
    /// Fails with `AlreadyExists` and leaves the stored value untouched if
    /// the key is present.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) -> Result<()> {
        let mut entries = self.entries.write();
        match entries.entry(key.into()) {
            Slot::Occupied(slot) => Err(CacheError::AlreadyExists(slot.key().clone())),
            Slot::Vacant(slot) => {
                slot.insert(value.into());
                Ok(())
            }
        }
    }

    /// Replace the value of an existing key (write lock)
    pub fn update(&self, key: &str, value: impl Into<Bytes>) -> Result<()> {
        let mut entries = self.entries.write();
        match entries.get_mut(key) {
            Some(current) => {
                *current = value.into();
                Ok(())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    /// Remove an existing key (write lock)
    pub fn delete(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| CacheError::NotFound(key.to_string()))
    }

    /// Get a value by key (read lock)
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.entries.read().get(key).cloned()
    }

    /// Number of entries (read lock)
    pub fn size(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Copy every entry out under one read lock
    ///
    /// Order is unspecified.
    pub fn dump_all(&self) -> Vec<Entry> {
        self.entries
            .read()
            .iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect()
    }

    /// Remove all entries (write lock)
    pub fn clear(&self) {
        self.entries.write().clear();
    }

    /// Write the full contents to `path` as a snapshot
    ///
    /// Holds the write lock for the whole encode + write, so no mutation
    /// interleaves with the save. The live map is never modified.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<()> {
        let entries = self.entries.write();
        let encoded = snapshot::encode(&entries)?;
        snapshot::write_file(path.as_ref(), &encoded)
    }

    /// Replace the full contents with the snapshot at `path`
    ///
    /// The file is read and decoded first; on any failure the Store is left
    /// untouched. On success the clear + repopulate happens under one write
    /// lock acquisition. Returns the number of entries loaded.
    pub fn load_from(&self, path: impl AsRef<Path>) -> Result<usize> {
        let raw = snapshot::read_file(path.as_ref())?;
        let loaded = snapshot::decode(&raw)?;
        let count = loaded.len();

        let mut entries = self.entries.write();
        *entries = loaded;

        Ok(count)
    }
}
