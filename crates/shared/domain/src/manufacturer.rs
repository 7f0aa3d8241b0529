//! Manufacturer entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Car manufacturer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manufacturer {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Manufacturer {
    pub fn new(id: Uuid, name: String, country: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            country,
            created_at: now,
            updated_at: now,
        }
    }
}

impl std::fmt::Display for Manufacturer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.country)
    }
}

/// Manufacturer creation payload
#[derive(Debug, Clone, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateManufacturer {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Country is required"))]
    pub country: String,
}

/// Manufacturer update payload
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UpdateManufacturer {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "Country cannot be empty"))]
    pub country: Option<String>,
}

/// Manufacturer as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ManufacturerResponse {
    pub id: Uuid,
    pub name: String,
    pub country: String,
    /// `"{name} {country}"`
    pub display: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Manufacturer> for ManufacturerResponse {
    fn from(m: &Manufacturer) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            country: m.country.clone(),
            display: m.to_string(),
            created_at: m.created_at,
        }
    }
}

impl From<Manufacturer> for ManufacturerResponse {
    fn from(m: Manufacturer) -> Self {
        Self::from(&m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_joins_name_and_country() {
        let m = Manufacturer::new(Uuid::new_v4(), "BMW".into(), "Germany".into());
        assert_eq!(m.to_string(), "BMW Germany");
    }

    #[test]
    fn test_create_requires_name() {
        let payload = CreateManufacturer {
            name: String::new(),
            country: "Japan".into(),
        };
        assert!(payload.validate().is_err());
    }
}
