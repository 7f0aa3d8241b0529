//! Domain layer for the taxi fleet registry.
//!
//! Entities, value objects, search filters and domain errors. No I/O.

pub mod assignment;
pub mod car;
pub mod constants;
pub mod driver;
pub mod error;
pub mod license;
pub mod manufacturer;
pub mod password;
pub mod search;
pub mod session;

pub use assignment::Assignment;
pub use car::{Car, CarDetail, CarDetailResponse, CarResponse, CarWithManufacturer, CreateCar, UpdateCar};
pub use constants::*;
pub use driver::{
    CreateDriver, Driver, DriverDetail, DriverDetailResponse, DriverResponse, NewDriver,
    UpdateDriverLicense,
};
pub use error::{DomainError, DomainResult};
pub use license::LicenseNumber;
pub use manufacturer::{CreateManufacturer, Manufacturer, ManufacturerResponse, UpdateManufacturer};
pub use password::Password;
pub use search::{CarSearch, DriverSearch, ManufacturerSearch, Search, SearchFilter};
pub use session::SessionState;
