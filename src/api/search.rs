use axum::extract::{Query as HttpQuery, State};
use axum::http::StatusCode;
use axum::Json;

use crate::error::SearchError;
use crate::models::{Query, SearchOutcome};
use crate::state::AppState;

/// GET /api/search?keyword=&repository=&field= - Run a query against the
/// registered repositories. All parameters are optional; no keyword means
/// "list everything in scope".
pub async fn search(
    State(state): State<AppState>,
    HttpQuery(query): HttpQuery<Query>,
) -> Result<Json<SearchOutcome>, (StatusCode, String)> {
    match state.engine.search(&query) {
        Ok(outcome) => Ok(Json(outcome)),
        Err(e @ SearchError::UnknownRepository(_)) => {
            Err((StatusCode::NOT_FOUND, e.to_string()))
        }
    }
}
