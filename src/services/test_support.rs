//! Mock-backed UnitOfWork for service tests.

use std::sync::Arc;

use crate::infra::{
    AssignmentRepository, CarRepository, DriverRepository, ManufacturerRepository,
    MockAssignmentRepository, MockCarRepository, MockDriverRepository,
    MockManufacturerRepository, UnitOfWork,
};

/// Each repository defaults to a mock with no expectations, so any
/// unexpected call fails the test.
pub struct TestUnitOfWork {
    manufacturers: Arc<MockManufacturerRepository>,
    cars: Arc<MockCarRepository>,
    drivers: Arc<MockDriverRepository>,
    assignments: Arc<MockAssignmentRepository>,
}

impl Default for TestUnitOfWork {
    fn default() -> Self {
        Self {
            manufacturers: Arc::new(MockManufacturerRepository::new()),
            cars: Arc::new(MockCarRepository::new()),
            drivers: Arc::new(MockDriverRepository::new()),
            assignments: Arc::new(MockAssignmentRepository::new()),
        }
    }
}

impl TestUnitOfWork {
    pub fn with_manufacturers(mut self, repo: MockManufacturerRepository) -> Self {
        self.manufacturers = Arc::new(repo);
        self
    }

    pub fn with_cars(mut self, repo: MockCarRepository) -> Self {
        self.cars = Arc::new(repo);
        self
    }

    pub fn with_drivers(mut self, repo: MockDriverRepository) -> Self {
        self.drivers = Arc::new(repo);
        self
    }

    pub fn with_assignments(mut self, repo: MockAssignmentRepository) -> Self {
        self.assignments = Arc::new(repo);
        self
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn manufacturers(&self) -> Arc<dyn ManufacturerRepository> {
        self.manufacturers.clone()
    }

    fn cars(&self) -> Arc<dyn CarRepository> {
        self.cars.clone()
    }

    fn drivers(&self) -> Arc<dyn DriverRepository> {
        self.drivers.clone()
    }

    fn assignments(&self) -> Arc<dyn AssignmentRepository> {
        self.assignments.clone()
    }
}
