//! The search engine: keyword matching over registered repositories.
//!
//! A query is (keyword, repository?, field?). Matching is a case-insensitive
//! literal substring test against a record's field texts: scoped to one
//! field when `field` is set, any field otherwise. An empty keyword matches
//! every record, which is how "list all" works. Results keep registry order,
//! then file order; no ranking, dedup, or pagination.

use std::sync::Arc;

use crate::error::SearchError;
use crate::models::{value_text, MatchResult, Query, Record, RepoEntry, SearchOutcome};
use crate::registry::Registry;
use crate::storage::Storage;

pub struct SearchEngine {
    registry: Arc<Registry>,
    storage: Arc<dyn Storage>,
}

impl SearchEngine {
    pub fn new(registry: Arc<Registry>, storage: Arc<dyn Storage>) -> Self {
        Self { registry, storage }
    }

    /// Evaluate a query against the registry's current repository set.
    ///
    /// A registered repository whose file is missing or unparseable at
    /// search time is skipped and reported in the outcome; it never aborts
    /// the query for the remaining repositories. An empty result list is a
    /// successful outcome.
    pub fn search(&self, query: &Query) -> Result<SearchOutcome, SearchError> {
        let targets: Vec<RepoEntry> = match &query.repository {
            Some(selector) => match self.registry.resolve(selector) {
                Some(entry) => vec![entry],
                None => return Err(SearchError::UnknownRepository(selector.clone())),
            },
            None => self.registry.list(),
        };

        let keyword = query
            .keyword
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();

        let mut outcome = SearchOutcome::default();

        for entry in &targets {
            let records = match self.storage.load_repository(&entry.path) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Skipping repository {}: {e}", entry.path);
                    outcome.skipped.push(entry.path.clone());
                    continue;
                }
            };

            for record in records {
                if record_matches(&record, &keyword, query.field.as_deref()) {
                    outcome.results.push(MatchResult {
                        repository: entry.name.clone(),
                        record,
                    });
                }
            }
        }

        Ok(outcome)
    }
}

/// Does this record match a lowercased keyword, optionally scoped to one
/// field? A field that is absent from the record simply does not match.
fn record_matches(record: &Record, keyword: &str, field: Option<&str>) -> bool {
    if keyword.is_empty() {
        return true;
    }
    match field {
        Some(field) => record
            .get(field)
            .is_some_and(|v| value_text(v).to_lowercase().contains(keyword)),
        None => record
            .values()
            .any(|v| value_text(v).to_lowercase().contains(keyword)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::mem::MemStorage;
    use serde_json::json;

    fn record(fields: serde_json::Value) -> Record {
        match fields {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    /// Engine over two repositories matching the reference scenario:
    /// repo1 has an example.com bookmark, repo2 has an unrelated one.
    fn two_repo_engine() -> SearchEngine {
        let storage = Arc::new(
            MemStorage::default()
                .with_repo(
                    "repo1.json",
                    vec![record(json!({"name": "Example Site", "url": "example.com"}))],
                )
                .with_repo("repo2.json", vec![record(json!({"name": "Other"}))]),
        );
        let registry = Arc::new(Registry::open(storage.clone()).unwrap());
        registry.add("repo1.json", None).unwrap();
        registry.add("repo2.json", None).unwrap();
        SearchEngine::new(registry, storage)
    }

    #[test]
    fn test_keyword_matches_across_repositories() {
        let engine = two_repo_engine();
        let outcome = engine.search(&Query::keyword("example")).unwrap();
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].repository, "repo1");
        assert!(outcome.skipped.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let engine = two_repo_engine();
        let upper = engine.search(&Query::keyword("EXAMPLE")).unwrap();
        let lower = engine.search(&Query::keyword("example")).unwrap();
        assert_eq!(upper.results.len(), lower.results.len());
        assert_eq!(upper.results[0].repository, lower.results[0].repository);
    }

    #[test]
    fn test_repository_scope_limits_results() {
        let engine = two_repo_engine();
        let query = Query {
            keyword: Some("example".to_string()),
            repository: Some("repo2.json".to_string()),
            field: None,
        };
        let outcome = engine.search(&query).unwrap();
        assert!(outcome.results.is_empty());
    }

    #[test]
    fn test_unknown_repository_is_an_error() {
        let engine = two_repo_engine();
        let query = Query {
            repository: Some("nope.json".to_string()),
            ..Query::default()
        };
        let err = engine.search(&query).unwrap_err();
        assert!(matches!(err, SearchError::UnknownRepository(_)));
    }

    #[test]
    fn test_empty_keyword_lists_all_in_one_repository() {
        let engine = two_repo_engine();
        let query = Query {
            keyword: Some(String::new()),
            repository: Some("repo1.json".to_string()),
            field: None,
        };
        let outcome = engine.search(&query).unwrap();
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.results[0].repository, "repo1");
    }

    #[test]
    fn test_field_scoping() {
        let rec = record(json!({"name": "example", "url": "other.com"}));
        assert!(!record_matches(&rec, "example", Some("url")));
        assert!(record_matches(&rec, "example", Some("name")));
        assert!(record_matches(&rec, "example", None));
    }

    #[test]
    fn test_unknown_field_matches_nothing() {
        let rec = record(json!({"name": "example"}));
        assert!(!record_matches(&rec, "example", Some("category")));
    }

    #[test]
    fn test_keyword_matches_inside_tag_lists() {
        let rec = record(json!({"name": "Algebra notes", "tags": ["math", "science"]}));
        assert!(record_matches(&rec, "science", Some("tags")));
        assert!(record_matches(&rec, "math", None));
        assert!(!record_matches(&rec, "history", Some("tags")));
    }

    #[test]
    fn test_regex_significant_keyword_is_literal() {
        let rec = record(json!({"url": "example.com/a+b?c=.*"}));
        assert!(record_matches(&rec, ".*", None));
        assert!(record_matches(&rec, "a+b?", None));
        // A regex-style wildcard must not match arbitrary text.
        let plain = record(json!({"url": "example.com"}));
        assert!(!record_matches(&plain, ".*", None));
    }

    #[test]
    fn test_missing_repository_is_skipped_not_fatal() {
        let storage = Arc::new(
            MemStorage::default()
                .with_repo(
                    "good.json",
                    vec![record(json!({"name": "Example", "url": "example.com"}))],
                )
                .with_repo("doomed.json", vec![]),
        );
        let registry = Arc::new(Registry::open(storage.clone()).unwrap());
        registry.add("doomed.json", None).unwrap();
        registry.add("good.json", None).unwrap();

        // File disappears after registration.
        storage.repos.lock().remove("doomed.json");

        let engine = SearchEngine::new(registry, storage);
        let outcome = engine.search(&Query::keyword("example")).unwrap();
        assert_eq!(outcome.results.len(), 1);
        assert_eq!(outcome.skipped, ["doomed.json"]);
    }

    #[test]
    fn test_results_keep_registry_then_file_order() {
        let storage = Arc::new(
            MemStorage::default()
                .with_repo(
                    "second.json",
                    vec![record(json!({"name": "c"})), record(json!({"name": "d"}))],
                )
                .with_repo(
                    "first.json",
                    vec![record(json!({"name": "a"})), record(json!({"name": "b"}))],
                ),
        );
        let registry = Arc::new(Registry::open(storage.clone()).unwrap());
        registry.add("first.json", None).unwrap();
        registry.add("second.json", None).unwrap();

        let engine = SearchEngine::new(registry, storage);
        let outcome = engine.search(&Query::default()).unwrap();
        let names: Vec<String> = outcome
            .results
            .iter()
            .map(|m| m.record["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_repeated_search_is_idempotent() {
        let engine = two_repo_engine();
        let first = engine.search(&Query::keyword("example")).unwrap();
        let second = engine.search(&Query::keyword("example")).unwrap();
        assert_eq!(first.results.len(), second.results.len());
        for (a, b) in first.results.iter().zip(&second.results) {
            assert_eq!(a.repository, b.repository);
            assert_eq!(a.record, b.record);
        }
    }

    #[test]
    fn test_empty_registry_yields_empty_success() {
        let storage = Arc::new(MemStorage::default());
        let registry = Arc::new(Registry::open(storage.clone()).unwrap());
        let engine = SearchEngine::new(registry, storage);

        let outcome = engine.search(&Query::keyword("anything")).unwrap();
        assert!(outcome.results.is_empty());
        assert!(outcome.skipped.is_empty());
    }
}
