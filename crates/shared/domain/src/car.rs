//! Car entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::driver::{Driver, DriverResponse};
use crate::manufacturer::{Manufacturer, ManufacturerResponse};

/// A car in the fleet. Always references one manufacturer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub model: String,
    pub manufacturer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Car {
    pub fn new(id: Uuid, model: String, manufacturer_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id,
            model,
            manufacturer_id,
            created_at: now,
            updated_at: now,
        }
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.model)
    }
}

/// Car joined with its manufacturer, the shape used by listings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarWithManufacturer {
    pub car: Car,
    pub manufacturer: Manufacturer,
}

/// Car with manufacturer and the drivers currently assigned to it.
#[derive(Debug, Clone)]
pub struct CarDetail {
    pub car: Car,
    pub manufacturer: Manufacturer,
    pub drivers: Vec<Driver>,
}

/// Car creation payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateCar {
    #[validate(length(min = 1, message = "Model is required"))]
    pub model: String,
    /// Required; absent or unknown manufacturers are rejected
    pub manufacturer_id: Option<Uuid>,
    /// Initial driver set
    #[serde(default)]
    pub driver_ids: Vec<Uuid>,
}

/// Car update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateCar {
    #[validate(length(min = 1, message = "Model cannot be empty"))]
    pub model: Option<String>,
    pub manufacturer_id: Option<Uuid>,
    /// Replaces the full driver set when present
    pub driver_ids: Option<Vec<Uuid>>,
}

/// Car summary returned by listings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CarResponse {
    pub id: Uuid,
    pub model: String,
    pub manufacturer: ManufacturerResponse,
    pub created_at: DateTime<Utc>,
}

impl From<CarWithManufacturer> for CarResponse {
    fn from(row: CarWithManufacturer) -> Self {
        Self {
            id: row.car.id,
            model: row.car.model,
            manufacturer: ManufacturerResponse::from(row.manufacturer),
            created_at: row.car.created_at,
        }
    }
}

/// Car detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CarDetailResponse {
    pub id: Uuid,
    pub model: String,
    pub manufacturer: ManufacturerResponse,
    pub drivers: Vec<DriverResponse>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<CarDetail> for CarDetailResponse {
    fn from(detail: CarDetail) -> Self {
        Self {
            id: detail.car.id,
            model: detail.car.model,
            manufacturer: ManufacturerResponse::from(detail.manufacturer),
            drivers: detail.drivers.into_iter().map(DriverResponse::from).collect(),
            created_at: detail.car.created_at,
            updated_at: detail.car.updated_at,
        }
    }
}
