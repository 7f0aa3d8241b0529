//! Driver entity and related types.
//!
//! A driver is a user account extended with a license number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::car::{CarResponse, CarWithManufacturer};
use crate::license::LicenseNumber;

/// Driver domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Driver {
    pub fn from_new(id: Uuid, new: NewDriver) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: new.username,
            password_hash: new.password_hash,
            first_name: new.first_name,
            last_name: new.last_name,
            license_number: new.license_number.into_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl std::fmt::Display for Driver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.username, self.first_name, self.last_name
        )
    }
}

/// Driver registration payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateDriver {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    /// Three uppercase letters followed by five digits
    pub license_number: String,
}

/// License update payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateDriverLicense {
    pub license_number: String,
}

/// Validated driver data ready for insertion.
#[derive(Debug, Clone)]
pub struct NewDriver {
    pub username: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: LicenseNumber,
}

/// Driver with the cars assigned to them.
#[derive(Debug, Clone)]
pub struct DriverDetail {
    pub driver: Driver,
    pub cars: Vec<CarWithManufacturer>,
}

/// Driver as returned to clients (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DriverResponse {
    pub id: Uuid,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub license_number: String,
    /// `"{username} ({first_name} {last_name})"`
    pub display: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Driver> for DriverResponse {
    fn from(d: &Driver) -> Self {
        Self {
            id: d.id,
            username: d.username.clone(),
            first_name: d.first_name.clone(),
            last_name: d.last_name.clone(),
            license_number: d.license_number.clone(),
            display: d.to_string(),
            created_at: d.created_at,
        }
    }
}

impl From<Driver> for DriverResponse {
    fn from(d: Driver) -> Self {
        Self::from(&d)
    }
}

/// Driver detail view
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DriverDetailResponse {
    #[serde(flatten)]
    pub driver: DriverResponse,
    pub cars: Vec<CarResponse>,
}

impl From<DriverDetail> for DriverDetailResponse {
    fn from(detail: DriverDetail) -> Self {
        Self {
            driver: DriverResponse::from(detail.driver),
            cars: detail.cars.into_iter().map(CarResponse::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn driver() -> Driver {
        Driver::from_new(
            Uuid::new_v4(),
            NewDriver {
                username: "john".into(),
                password_hash: "hash".into(),
                first_name: "John".into(),
                last_name: "Smith".into(),
                license_number: LicenseNumber::parse("JON12345").unwrap(),
            },
        )
    }

    #[test]
    fn test_display_format() {
        assert_eq!(driver().to_string(), "john (John Smith)");
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let json = serde_json::to_string(&driver()).unwrap();
        assert!(!json.contains("password_hash"));
        assert!(!json.contains("hash\""));
    }

    #[test]
    fn test_response_carries_display() {
        let response = DriverResponse::from(driver());
        assert_eq!(response.display, "john (John Smith)");
        assert_eq!(response.license_number, "JON12345");
    }
}
