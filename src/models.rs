use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One bookmark entry: a mapping from field name ("name", "url", "tags", ...)
/// to value. No fixed schema; field lookup is allowed to miss. The map keeps
/// file order so query output is reproducible.
pub type Record = serde_json::Map<String, Value>;

/// A registered repository
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoEntry {
    /// Path of the backing file; the registry's identity key.
    pub path: String,
    /// Display name; defaults to the file stem of `path`.
    pub name: String,
    pub added_at: DateTime<Utc>,
}

impl RepoEntry {
    pub fn new(path: String, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| display_name(&path));
        Self {
            path,
            name,
            added_at: Utc::now(),
        }
    }
}

/// Derive a display name from a repository path ("repo/urls.json" -> "urls").
pub fn display_name(path: &str) -> String {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(path)
        .to_string()
}

/// A search request: keyword, optionally scoped to one repository and/or
/// one field. All three are optional; an absent keyword matches everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Query {
    pub keyword: Option<String>,
    pub repository: Option<String>,
    pub field: Option<String>,
}

impl Query {
    pub fn keyword(keyword: &str) -> Self {
        Self {
            keyword: Some(keyword.to_string()),
            ..Self::default()
        }
    }
}

/// One matching record, annotated with the repository it came from.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub repository: String,
    pub record: Record,
}

/// The full outcome of a query: ordered matches plus the paths of any
/// registered repositories that could not be read and were skipped.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<MatchResult>,
    pub skipped: Vec<String>,
}

/// Add-repository request
#[derive(Debug, Clone, Deserialize)]
pub struct AddRepoRequest {
    pub path: String,
    pub name: Option<String>,
}

/// Delete-repository request
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteRepoRequest {
    pub path: String,
}

/// Render a record field value as the text the matcher sees. Strings are
/// used as-is; arrays (e.g. a `tags` list) join their element texts so a
/// keyword can hit any element; other scalars use their JSON display form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(value_text)
            .collect::<Vec<_>>()
            .join(" "),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
