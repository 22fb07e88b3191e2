//! Axum HTTP handlers. Each named error kind maps to its own status code;
//! "not found" and "invalid" are never collapsed into one generic failure.

pub mod repos;
pub mod search;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the API router over shared state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/repositories", get(repos::list_repositories))
        .route("/api/repositories", post(repos::add_repository))
        .route("/api/repositories/delete", post(repos::delete_repository))
        .route("/api/search", get(search::search))
        .with_state(state)
}
