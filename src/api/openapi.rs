//! OpenAPI documentation, served as JSON at `/api-docs/openapi.json`.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use domain::{
    Assignment, CarDetailResponse, CarResponse, CreateCar, CreateDriver, CreateManufacturer,
    DriverDetailResponse, DriverResponse, ManufacturerResponse, UpdateCar, UpdateDriverLicense,
    UpdateManufacturer,
};

use crate::api::handlers::{auth_handler, car_handler, index_handler};
use crate::services::{IndexStats, TokenResponse};
use crate::types::PaginationMeta;

/// OpenAPI documentation for the taxi service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taxi Service",
        version = "0.1.0",
        description = "Fleet registry: manufacturers, cars, drivers and their assignments"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        auth_handler::register,
        auth_handler::login,
        index_handler::index,
        car_handler::toggle_assign,
    ),
    components(
        schemas(
            ManufacturerResponse,
            CreateManufacturer,
            UpdateManufacturer,
            CarResponse,
            CarDetailResponse,
            CreateCar,
            UpdateCar,
            DriverResponse,
            DriverDetailResponse,
            CreateDriver,
            UpdateDriverLicense,
            Assignment,
            IndexStats,
            PaginationMeta,
            auth_handler::LoginRequest,
            TokenResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Driver registration and login"),
        (name = "Index", description = "Fleet statistics"),
        (name = "Cars", description = "Cars and driver assignment")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT token obtained from /auth/login"))
                        .build(),
                ),
            );
        }
    }
}
