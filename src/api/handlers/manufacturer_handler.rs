//! Manufacturer routes.

use axum::Router;

use super::resource_handler::resource_routes;
use crate::api::AppState;
use crate::services::Manufacturers;

pub fn manufacturer_routes() -> Router<AppState> {
    resource_routes::<Manufacturers>()
}
