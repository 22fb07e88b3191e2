//! # neosearch
//!
//! A personal bookmark lookup tool. Bookmarks live in "repositories": flat
//! JSON files, each a list of records mapping field names (`name`, `url`,
//! `tags`, ...) to values. A durable registry tracks which repository files
//! exist, and the search engine evaluates keyword queries against them with
//! optional repository- and field-level scoping.
//!
//! ## Architecture
//!
//! ```text
//!   CLI (clap)            HTTP (axum)
//!        │                     │
//!        └──────────┬──────────┘
//!                   ▼
//!        ┌──────────────────────┐
//!        │   Registry           │  add / delete / list
//!        │   (persisted set of  │  write-then-acknowledge
//!        │    repository paths) │
//!        └──────────┬───────────┘
//!                   ▼
//!        ┌──────────────────────┐
//!        │   SearchEngine       │  resolve scope → load records
//!        │                      │  → case-insensitive substring
//!        │                      │  → ordered matches + skipped
//!        └──────────┬───────────┘
//!                   ▼
//!        ┌──────────────────────┐
//!        │   Storage port       │  registry file, repository files
//!        └──────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for data dir and bind address
//! - [`models`] - Shared data types: `RepoEntry`, `Record`, `Query`, responses
//! - [`error`] - Registry and search error taxonomy
//! - [`storage`] - Storage port: registry persistence and repository loading
//! - [`registry`] - The durable set of registered repositories
//! - [`search`] - Keyword matching over repository records
//! - [`api`] - Axum HTTP handlers for registry CRUD and search
//! - [`cli`] - Clap subcommands wrapping the same four operations
//! - [`state`] - Shared application state for the HTTP server

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod registry;
pub mod search;
pub mod state;
pub mod storage;
