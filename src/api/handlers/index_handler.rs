//! Home page and health check.

use axum::{extract::State, http::StatusCode, response::Json, Extension};
use serde::Serialize;

use common::AppResult;

use crate::api::middleware::CurrentDriver;
use crate::api::AppState;
use crate::services::IndexStats;

/// Fleet totals and the caller's visit counter
#[utoipa::path(
    get,
    path = "/",
    tag = "Index",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Fleet statistics", body = IndexStats),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn index(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentDriver>,
) -> AppResult<Json<IndexStats>> {
    let session = state.sessions.record_visit(&caller.session_key()).await?;
    let stats = state.index_service.index(session).await?;

    Ok(Json(stats))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

/// Liveness plus database connectivity
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.database.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "healthy",
            }),
        ),
        Err(e) => {
            tracing::warn!("Database health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    database: "unhealthy",
                }),
            )
        }
    }
}
