//! Car use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{CarDetail, CarDetailResponse, CarResponse, CarSearch, CreateCar, UpdateCar};

use super::resource::Resource;
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

pub struct CarManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CarManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Car with its manufacturer and assigned drivers.
    pub async fn detail(&self, id: Uuid) -> AppResult<CarDetail> {
        let row = self.uow.cars().find_by_id(id).await?.ok_or_not_found()?;
        let drivers = self.uow.drivers().list_for_car(id).await?;
        Ok(CarDetail {
            car: row.car,
            manufacturer: row.manufacturer,
            drivers,
        })
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> Resource for CarManager<U> {
    const NAME: &'static str = "car";

    type Search = CarSearch;
    type Create = CreateCar;
    type Update = UpdateCar;
    type Summary = CarResponse;
    type Detail = CarDetailResponse;

    async fn list(
        &self,
        search: CarSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<CarResponse>> {
        let page = self.uow.cars().search(&search, page).await?;
        Ok(page.map(CarResponse::from))
    }

    async fn get(&self, id: Uuid) -> AppResult<CarDetailResponse> {
        Ok(self.detail(id).await?.into())
    }

    async fn create(&self, payload: CreateCar) -> AppResult<CarDetailResponse> {
        let manufacturer_id = payload
            .manufacturer_id
            .ok_or_else(|| AppError::validation("A car must have a manufacturer"))?;

        let row = self
            .uow
            .cars()
            .create(payload.model, manufacturer_id, payload.driver_ids)
            .await?;
        tracing::info!(id = %row.car.id, %manufacturer_id, "Car created");

        Ok(self.detail(row.car.id).await?.into())
    }

    async fn update(&self, id: Uuid, payload: UpdateCar) -> AppResult<CarDetailResponse> {
        self.uow.cars().update(id, payload).await?;
        Ok(self.detail(id).await?.into())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.uow.cars().delete(id).await?;
        tracing::info!(%id, "Car deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{MockCarRepository, MockDriverRepository};
    use crate::services::test_support::TestUnitOfWork;
    use domain::{Car, CarWithManufacturer, Manufacturer};

    fn row(model: &str) -> CarWithManufacturer {
        let manufacturer = Manufacturer::new(Uuid::new_v4(), "BMW".into(), "Germany".into());
        CarWithManufacturer {
            car: Car::new(Uuid::new_v4(), model.into(), manufacturer.id),
            manufacturer,
        }
    }

    #[tokio::test]
    async fn test_create_without_manufacturer_rejected() {
        let mut cars = MockCarRepository::new();
        cars.expect_create().never();

        let uow = TestUnitOfWork::default().with_cars(cars);
        let service = CarManager::new(Arc::new(uow));

        let result = service
            .create(CreateCar {
                model: "M5".into(),
                manufacturer_id: None,
                driver_ids: vec![],
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_unknown_manufacturer_propagates_validation() {
        let mut cars = MockCarRepository::new();
        cars.expect_create()
            .returning(|_, _, _| Err(AppError::validation("Manufacturer does not exist")));

        let uow = TestUnitOfWork::default().with_cars(cars);
        let service = CarManager::new(Arc::new(uow));

        let result = service
            .create(CreateCar {
                model: "M5".into(),
                manufacturer_id: Some(Uuid::new_v4()),
                driver_ids: vec![],
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_includes_drivers() {
        let car = row("X5");
        let car_id = car.car.id;

        let mut cars = MockCarRepository::new();
        cars.expect_find_by_id()
            .returning(move |_| Ok(Some(car.clone())));
        let mut drivers = MockDriverRepository::new();
        drivers
            .expect_list_for_car()
            .returning(|_| Ok(vec![]));

        let uow = TestUnitOfWork::default()
            .with_cars(cars)
            .with_drivers(drivers);
        let service = CarManager::new(Arc::new(uow));

        let detail = service.get(car_id).await.unwrap();
        assert_eq!(detail.model, "X5");
        assert_eq!(detail.manufacturer.display, "BMW Germany");
        assert!(detail.drivers.is_empty());
    }
}
