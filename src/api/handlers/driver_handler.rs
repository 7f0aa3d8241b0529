//! Driver routes. Drivers are never replaced wholesale; the only update is
//! the license number.

use axum::{
    routing::{get, put},
    Router,
};

use super::resource_handler::{create, destroy, list, show, update};
use crate::api::AppState;
use crate::services::Drivers;

pub fn driver_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list::<Drivers>).post(create::<Drivers>))
        .route("/search", get(list::<Drivers>))
        .route("/:id", get(show::<Drivers>).delete(destroy::<Drivers>))
        .route("/:id/license", put(update::<Drivers>))
}
