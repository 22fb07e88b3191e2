//! Error taxonomy for registry mutations and search.
//!
//! Every failure a caller can see is one of these named kinds; front ends
//! map them to distinct status codes / exit codes instead of collapsing
//! them into a generic failure.

use thiserror::Error;

/// Errors from registry mutations. Each variant leaves the registry
/// unchanged: a partially-applied registration never occurs.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// `add` called on a path already tracked. Non-fatal, but reported
    /// distinctly from success so callers can tell a no-op from a mutation.
    #[error("repository already registered: {0}")]
    AlreadyRegistered(String),

    /// The repository file does not exist on disk.
    #[error("repository file not found: {0}")]
    NotFound(String),

    /// The file exists but does not parse as a list of records.
    #[error("not a valid repository: {path}: {reason}")]
    Invalid { path: String, reason: String },

    /// `delete` called on a path that is not in the registry.
    #[error("repository not registered: {0}")]
    NotRegistered(String),

    /// The registry's own persisted state could not be read or written.
    #[error("registry storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from the search engine. Per-repository read failures are not
/// here: they are contained within a query and reported as skips.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query was scoped to a repository name not present in the registry.
    #[error("unknown repository: {0}")]
    UnknownRepository(String),
}

/// Failure reading or writing the registry's persisted entry set.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StorageError(pub String);

/// Failure loading one repository file. `NotFound` and `Parse` are
/// distinguished so `add` can report them as separate kinds.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found")]
    NotFound,
    #[error("invalid repository format: {0}")]
    Parse(String),
    #[error("io error: {0}")]
    Io(String),
}
