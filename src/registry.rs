//! The repository registry: the durable set of known repository locations.
//!
//! Mutations are write-then-acknowledge: the updated entry set is flushed to
//! storage before `add`/`delete` return success, and the whole
//! read-modify-write-flush sequence runs under the write lock so concurrent
//! mutations cannot race on the persisted set.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::error::{LoadError, RegistryError};
use crate::models::RepoEntry;
use crate::storage::Storage;

pub struct Registry {
    entries: RwLock<Vec<RepoEntry>>,
    storage: Arc<dyn Storage>,
}

impl Registry {
    /// Load the persisted entry set. Runs before any request is served.
    pub fn open(storage: Arc<dyn Storage>) -> Result<Self, RegistryError> {
        let entries = storage.load_registry()?;
        Ok(Self {
            entries: RwLock::new(entries),
            storage,
        })
    }

    /// Register a repository path. The file must exist and parse as a list
    /// of records; validation happens before any state changes, so a failed
    /// add leaves both memory and storage untouched.
    pub fn add(&self, path: &str, name: Option<String>) -> Result<RepoEntry, RegistryError> {
        let mut entries = self.entries.write();

        if entries.iter().any(|e| e.path == path) {
            return Err(RegistryError::AlreadyRegistered(path.to_string()));
        }

        match self.storage.load_repository(path) {
            Ok(_) => {}
            Err(LoadError::NotFound) => {
                return Err(RegistryError::NotFound(path.to_string()));
            }
            Err(LoadError::Parse(reason)) | Err(LoadError::Io(reason)) => {
                return Err(RegistryError::Invalid {
                    path: path.to_string(),
                    reason,
                });
            }
        }

        let entry = RepoEntry::new(path.to_string(), name);
        entries.push(entry.clone());

        // Flush before acknowledging; roll back the append if it fails.
        if let Err(e) = self.storage.save_registry(&entries) {
            entries.pop();
            return Err(RegistryError::Storage(e));
        }

        Ok(entry)
    }

    /// Unregister a repository. The backing file is left untouched.
    pub fn delete(&self, path: &str) -> Result<(), RegistryError> {
        let mut entries = self.entries.write();

        let idx = entries
            .iter()
            .position(|e| e.path == path)
            .ok_or_else(|| RegistryError::NotRegistered(path.to_string()))?;

        let removed = entries.remove(idx);

        if let Err(e) = self.storage.save_registry(&entries) {
            entries.insert(idx, removed);
            return Err(RegistryError::Storage(e));
        }

        Ok(())
    }

    /// Snapshot of registered entries in insertion order. Reads only the
    /// in-memory set; never touches repository files.
    pub fn list(&self) -> Vec<RepoEntry> {
        self.entries.read().clone()
    }

    /// Resolve a repository selector (path or display name) to its entry.
    pub fn resolve(&self, selector: &str) -> Option<RepoEntry> {
        self.entries
            .read()
            .iter()
            .find(|e| e.path == selector || e.name == selector)
            .cloned()
    }
}
