//! Infrastructure layer
//!
//! Database connection, migrations, repositories, session storage and the
//! Unit of Work tying the repositories together.

pub mod cache;
pub mod db;
pub mod repositories;
pub mod unit_of_work;

pub use cache::{Cache, MemorySessionStore, SessionStore};
pub use db::{Database, Migrator};
pub use repositories::{
    AssignmentRepository, AssignmentStore, CarRepository, CarStore, DriverRepository, DriverStore,
    ManufacturerRepository, ManufacturerStore,
};
pub use unit_of_work::{in_transaction, Persistence, UnitOfWork};

#[cfg(any(test, feature = "test-utils"))]
pub use cache::MockSessionStore;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockAssignmentRepository, MockCarRepository, MockDriverRepository, MockManufacturerRepository,
};
