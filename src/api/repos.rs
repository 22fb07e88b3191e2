use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use crate::error::RegistryError;
use crate::models::{AddRepoRequest, DeleteRepoRequest, RepoEntry};
use crate::state::AppState;

/// GET /api/repositories - List registered repositories in insertion order
pub async fn list_repositories(State(state): State<AppState>) -> Json<Vec<RepoEntry>> {
    Json(state.registry.list())
}

/// POST /api/repositories - Register a repository file
pub async fn add_repository(
    State(state): State<AppState>,
    Json(req): Json<AddRepoRequest>,
) -> Result<(StatusCode, Json<RepoEntry>), (StatusCode, String)> {
    let path = req.path.trim().to_string();
    if path.is_empty() {
        return Err((StatusCode::BAD_REQUEST, "Path is required".to_string()));
    }

    match state.registry.add(&path, req.name) {
        Ok(entry) => {
            tracing::info!("Registered repository {path}");
            Ok((StatusCode::CREATED, Json(entry)))
        }
        Err(e) => Err(registry_error_response(e)),
    }
}

/// POST /api/repositories/delete - Unregister a repository (file untouched)
pub async fn delete_repository(
    State(state): State<AppState>,
    Json(req): Json<DeleteRepoRequest>,
) -> Result<StatusCode, (StatusCode, String)> {
    match state.registry.delete(&req.path) {
        Ok(()) => {
            tracing::info!("Unregistered repository {}", req.path);
            Ok(StatusCode::NO_CONTENT)
        }
        Err(e) => Err(registry_error_response(e)),
    }
}

/// Map each registry error kind to its own status code.
fn registry_error_response(err: RegistryError) -> (StatusCode, String) {
    let status = match &err {
        RegistryError::AlreadyRegistered(_) => StatusCode::CONFLICT,
        RegistryError::NotFound(_) | RegistryError::NotRegistered(_) => StatusCode::NOT_FOUND,
        RegistryError::Invalid { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        RegistryError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, err.to_string())
}
