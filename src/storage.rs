//! Storage port: the registry's persisted entry set and repository files.
//!
//! Keeps filesystem side effects out of the registry and engine logic so
//! both are testable against an in-memory implementation.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, StorageError};
use crate::models::{Record, RepoEntry};

/// Filesystem access needed by the registry and the search engine.
pub trait Storage: Send + Sync {
    /// Load the persisted registry entry set. A missing file is an empty
    /// registry, not an error.
    fn load_registry(&self) -> Result<Vec<RepoEntry>, StorageError>;

    /// Persist the entry set durably before the caller acknowledges success.
    fn save_registry(&self, entries: &[RepoEntry]) -> Result<(), StorageError>;

    /// Load one repository file as a list of records.
    fn load_repository(&self, path: &str) -> Result<Vec<Record>, LoadError>;
}

/// JSON-file storage: the registry is a JSON list of entries, each
/// repository a JSON list of records. Both are human-editable and may be
/// modified externally between operations.
pub struct FsStorage {
    registry_path: PathBuf,
}

impl FsStorage {
    pub fn new(registry_path: PathBuf) -> Self {
        Self { registry_path }
    }
}

impl Storage for FsStorage {
    fn load_registry(&self) -> Result<Vec<RepoEntry>, StorageError> {
        if !self.registry_path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.registry_path)
            .map_err(|e| StorageError(format!("read {}: {e}", self.registry_path.display())))?;
        serde_json::from_str(&data)
            .map_err(|e| StorageError(format!("parse {}: {e}", self.registry_path.display())))
    }

    fn save_registry(&self, entries: &[RepoEntry]) -> Result<(), StorageError> {
        if let Some(dir) = self.registry_path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| StorageError(format!("create {}: {e}", dir.display())))?;
        }
        let data = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError(format!("serialize registry: {e}")))?;
        // Atomic write via temp file + rename so a concurrent reader never
        // observes a partially-written entry set.
        let tmp_path = self.registry_path.with_extension("json.tmp");
        std::fs::write(&tmp_path, &data)
            .map_err(|e| StorageError(format!("write {}: {e}", tmp_path.display())))?;
        std::fs::rename(&tmp_path, &self.registry_path)
            .map_err(|e| StorageError(format!("rename {}: {e}", tmp_path.display())))
    }

    fn load_repository(&self, path: &str) -> Result<Vec<Record>, LoadError> {
        load_repository_file(Path::new(path))
    }
}

/// Read and parse one repository file. The handle is scoped to this call and
/// released on every exit path, parse failure included.
pub fn load_repository_file(path: &Path) -> Result<Vec<Record>, LoadError> {
    let data = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LoadError::NotFound,
        _ => LoadError::Io(e.to_string()),
    })?;
    serde_json::from_str(&data).map_err(|e| LoadError::Parse(e.to_string()))
}
