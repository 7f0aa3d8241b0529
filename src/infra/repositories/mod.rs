//! Repository layer - Data access abstraction
//!
//! One trait per aggregate with a SeaORM-backed `*Store` implementation.

mod assignment_repository;
mod base;
mod car_repository;
mod driver_repository;
pub(crate) mod entities;
mod manufacturer_repository;

pub use assignment_repository::{AssignmentRepository, AssignmentStore};
pub use car_repository::{CarRepository, CarStore};
pub use driver_repository::{DriverRepository, DriverStore};
pub use manufacturer_repository::{ManufacturerRepository, ManufacturerStore};

#[cfg(any(test, feature = "test-utils"))]
pub use assignment_repository::MockAssignmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use car_repository::MockCarRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use driver_repository::MockDriverRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use manufacturer_repository::MockManufacturerRepository;
