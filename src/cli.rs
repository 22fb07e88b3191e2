//! Clap front end. Each subcommand wraps one registry/search operation and
//! exits with a distinct code per error kind, mirroring the HTTP status
//! mapping in [`crate::api`].

use clap::{Parser, Subcommand};

use crate::error::{RegistryError, SearchError};
use crate::models::Query;
use crate::state::AppState;

#[derive(Debug, Parser)]
#[command(name = "neosearch", about = "Bookmark repository registry and keyword search")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Start the HTTP API server
    Serve,
    /// Register a repository file
    Add {
        /// Path of the repository JSON file
        path: String,
        /// Display name (defaults to the file stem)
        #[arg(long)]
        name: Option<String>,
    },
    /// Unregister a repository; the file on disk is left untouched
    Delete {
        path: String,
    },
    /// List registered repositories in insertion order
    List,
    /// Search registered repositories by keyword
    Search {
        /// Case-insensitive substring to look for; omit to list everything
        keyword: Option<String>,
        /// Restrict the search to one repository (path or display name)
        #[arg(long)]
        repository: Option<String>,
        /// Restrict matching to one record field (e.g. name, url, tags)
        #[arg(long)]
        field: Option<String>,
    },
}

/// Process exit codes, one per error kind.
mod exit {
    pub const OK: i32 = 0;
    pub const STORAGE: i32 = 1;
    pub const ALREADY_REGISTERED: i32 = 2;
    pub const NOT_FOUND: i32 = 3;
    pub const INVALID: i32 = 4;
    pub const NOT_REGISTERED: i32 = 5;
    pub const UNKNOWN_REPOSITORY: i32 = 6;
}

/// Run a non-serve subcommand against the shared state. Returns the process
/// exit code.
pub fn run(command: Command, state: &AppState) -> i32 {
    match command {
        Command::Serve => unreachable!("serve is handled by main"),
        Command::Add { path, name } => match state.registry.add(&path, name) {
            Ok(entry) => {
                println!("Registered {} as '{}'", entry.path, entry.name);
                exit::OK
            }
            Err(e) => report_registry_error(e),
        },
        Command::Delete { path } => match state.registry.delete(&path) {
            Ok(()) => {
                println!("Unregistered {path}");
                exit::OK
            }
            Err(e) => report_registry_error(e),
        },
        Command::List => {
            let entries = state.registry.list();
            if entries.is_empty() {
                println!("No repositories registered.");
            }
            for entry in entries {
                println!("{}\t{}", entry.name, entry.path);
            }
            exit::OK
        }
        Command::Search {
            keyword,
            repository,
            field,
        } => {
            let query = Query {
                keyword,
                repository,
                field,
            };
            match state.engine.search(&query) {
                Ok(outcome) => {
                    for skipped in &outcome.skipped {
                        eprintln!("warning: skipped unreadable repository {skipped}");
                    }
                    if outcome.results.is_empty() {
                        println!("No results found.");
                    }
                    for m in &outcome.results {
                        let record =
                            serde_json::to_string(&m.record).unwrap_or_else(|_| "{}".to_string());
                        println!("[{}] {record}", m.repository);
                    }
                    exit::OK
                }
                Err(e @ SearchError::UnknownRepository(_)) => {
                    eprintln!("error: {e}");
                    exit::UNKNOWN_REPOSITORY
                }
            }
        }
    }
}

fn report_registry_error(err: RegistryError) -> i32 {
    eprintln!("error: {err}");
    match err {
        RegistryError::AlreadyRegistered(_) => exit::ALREADY_REGISTERED,
        RegistryError::NotFound(_) => exit::NOT_FOUND,
        RegistryError::Invalid { .. } => exit::INVALID,
        RegistryError::NotRegistered(_) => exit::NOT_REGISTERED,
        RegistryError::Storage(_) => exit::STORAGE,
    }
}
