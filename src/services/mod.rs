//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They reach storage only through the
//! [`UnitOfWork`](crate::infra::UnitOfWork) abstraction.

mod assignment_service;
mod auth_service;
mod car_service;
pub mod container;
mod driver_service;
mod index_service;
mod manufacturer_service;
pub mod resource;

#[cfg(test)]
pub(crate) mod test_support;

pub use container::{Cars, Drivers, Manufacturers, Services};

pub use assignment_service::{AssignmentManager, AssignmentService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use car_service::CarManager;
pub use driver_service::DriverManager;
pub use index_service::{IndexManager, IndexService, IndexStats};
pub use manufacturer_service::ManufacturerManager;
pub use resource::{Action, Resource};
