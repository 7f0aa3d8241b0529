//! Generic CRUD handlers shared by every [`Resource`].

use std::sync::Arc;

use axum::{
    extract::{FromRef, Path, Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use uuid::Uuid;

use common::AppResult;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentDriver;
use crate::api::AppState;
use crate::services::{Action, Resource};
use crate::types::{Created, NoContent, Paginated, PaginationParams};

/// `GET /` and `POST /` on the collection, `GET`/`PUT`/`DELETE` on `/:id`.
pub fn resource_routes<R>() -> Router<AppState>
where
    R: Resource,
    Arc<R>: FromRef<AppState>,
{
    Router::new()
        .route("/", get(list::<R>).post(create::<R>))
        .route("/:id", get(show::<R>).put(update::<R>).delete(destroy::<R>))
}

/// Paginated, filtered listing.
pub async fn list<R: Resource>(
    State(resource): State<Arc<R>>,
    Query(search): Query<R::Search>,
    Query(page): Query<PaginationParams>,
) -> AppResult<Json<Paginated<R::Summary>>> {
    let page = resource.list(search, page).await?;
    Ok(Json(page))
}

pub async fn show<R: Resource>(
    State(resource): State<Arc<R>>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<R::Detail>> {
    Ok(Json(resource.get(id).await?))
}

pub async fn create<R: Resource>(
    State(resource): State<Arc<R>>,
    ValidatedJson(payload): ValidatedJson<R::Create>,
) -> AppResult<Created<R::Detail>> {
    let created = resource.create(payload).await?;
    Ok(Created(created))
}

pub async fn update<R: Resource>(
    State(resource): State<Arc<R>>,
    Extension(caller): Extension<CurrentDriver>,
    Path(id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<R::Update>,
) -> AppResult<Json<R::Detail>> {
    resource.authorize(caller.id, id, Action::Update)?;
    Ok(Json(resource.update(id, payload).await?))
}

pub async fn destroy<R: Resource>(
    State(resource): State<Arc<R>>,
    Extension(caller): Extension<CurrentDriver>,
    Path(id): Path<Uuid>,
) -> AppResult<NoContent> {
    resource.authorize(caller.id, id, Action::Delete)?;
    resource.delete(id).await?;
    tracing::debug!(resource = R::NAME, %id, by = %caller.id, "Deleted");
    Ok(NoContent)
}
