//! Home page statistics.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use common::AppResult;
use domain::SessionState;

use crate::infra::UnitOfWork;

/// Fleet totals plus the caller's visit counter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IndexStats {
    pub num_drivers: u64,
    pub num_cars: u64,
    pub num_manufacturers: u64,
    /// Visits to this page in the caller's session, including this one
    pub num_visits: u64,
}

#[async_trait]
pub trait IndexService: Send + Sync {
    /// Count the fleet and report `session`, whose current visit the
    /// session store has already recorded.
    async fn index(&self, session: SessionState) -> AppResult<IndexStats>;
}

pub struct IndexManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> IndexManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> IndexService for IndexManager<U> {
    async fn index(&self, session: SessionState) -> AppResult<IndexStats> {
        let drivers = self.uow.drivers();
        let cars = self.uow.cars();
        let manufacturers = self.uow.manufacturers();

        let (num_drivers, num_cars, num_manufacturers) =
            tokio::try_join!(drivers.count(), cars.count(), manufacturers.count())?;

        Ok(IndexStats {
            num_drivers,
            num_cars,
            num_manufacturers,
            num_visits: session.num_visits,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCarRepository, MockDriverRepository, MockManufacturerRepository};
    use crate::services::test_support::TestUnitOfWork;

    fn uow() -> TestUnitOfWork {
        let mut drivers = MockDriverRepository::new();
        drivers.expect_count().returning(|| Ok(3));
        let mut cars = MockCarRepository::new();
        cars.expect_count().returning(|| Ok(5));
        let mut manufacturers = MockManufacturerRepository::new();
        manufacturers.expect_count().returning(|| Ok(2));

        TestUnitOfWork::default()
            .with_drivers(drivers)
            .with_cars(cars)
            .with_manufacturers(manufacturers)
    }

    #[tokio::test]
    async fn test_first_visit_counts_one() {
        let service = IndexManager::new(Arc::new(uow()));

        let session = SessionState::default().visited();
        let stats = service.index(session).await.unwrap();

        assert_eq!(
            stats,
            IndexStats {
                num_drivers: 3,
                num_cars: 5,
                num_manufacturers: 2,
                num_visits: 1,
            }
        );
    }

    #[tokio::test]
    async fn test_reports_session_visits() {
        let service = IndexManager::new(Arc::new(uow()));

        let stats = service
            .index(SessionState { num_visits: 7 })
            .await
            .unwrap();

        assert_eq!(stats.num_visits, 7);
    }
}
