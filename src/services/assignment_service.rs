//! Driver-car assignment use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::AppResult;
use domain::Assignment;

use crate::infra::UnitOfWork;

#[async_trait]
pub trait AssignmentService: Send + Sync {
    /// Assign the driver to the car if unassigned, unassign otherwise.
    async fn toggle(&self, driver_id: Uuid, car_id: Uuid) -> AppResult<Assignment>;
}

pub struct AssignmentManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> AssignmentManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> AssignmentService for AssignmentManager<U> {
    async fn toggle(&self, driver_id: Uuid, car_id: Uuid) -> AppResult<Assignment> {
        let outcome = self.uow.assignments().toggle(car_id, driver_id).await?;
        tracing::info!(%driver_id, %car_id, %outcome, "Assignment toggled");
        Ok(outcome)
    }
}
