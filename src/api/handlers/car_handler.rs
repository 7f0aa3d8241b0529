//! Car routes: the generic resource set plus search and assignment toggling.

use axum::{
    extract::{Path, State},
    response::Redirect,
    routing::{get, post},
    Extension, Router,
};
use uuid::Uuid;

use common::AppResult;

use super::resource_handler::{list, resource_routes};
use crate::api::middleware::CurrentDriver;
use crate::api::AppState;
use crate::services::Cars;

pub fn car_routes() -> Router<AppState> {
    resource_routes::<Cars>()
        .route("/search", get(list::<Cars>))
        .route("/:id/toggle-assign", post(toggle_assign))
}

/// Assign the caller to the car, or unassign them if already assigned
#[utoipa::path(
    post,
    path = "/cars/{id}/toggle-assign",
    tag = "Cars",
    security(("bearer_auth" = [])),
    params(
        ("id" = Uuid, Path, description = "Car ID")
    ),
    responses(
        (status = 303, description = "Toggled; redirects to the car detail"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Car or driver not found")
    )
)]
pub async fn toggle_assign(
    State(state): State<AppState>,
    Extension(caller): Extension<CurrentDriver>,
    Path(id): Path<Uuid>,
) -> AppResult<Redirect> {
    state.assignment_service.toggle(caller.id, id).await?;
    Ok(Redirect::to(&format!("/cars/{}", id)))
}
