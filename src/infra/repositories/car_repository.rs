//! Car repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select, Set,
};
use uuid::Uuid;

use super::assignment_repository::replace_drivers;
use super::base::{all_of, contains, fetch_page};
use super::entities::{
    car::{self, ActiveModel, Entity as CarEntity},
    car_driver, manufacturer,
};
use crate::infra::unit_of_work::in_transaction;
use crate::types::{Paginated, PaginationParams};
use common::{AppError, AppResult, OptionExt};
use domain::{Car, CarSearch, CarWithManufacturer, Manufacturer, UpdateCar};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY: &str = "Car";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CarWithManufacturer>>;

    /// Matching cars with their manufacturers, in creation order.
    async fn search(
        &self,
        search: &CarSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<CarWithManufacturer>>;

    /// Insert a car and its initial driver set in one transaction.
    ///
    /// An unknown manufacturer or driver is a validation error.
    async fn create(
        &self,
        model: String,
        manufacturer_id: Uuid,
        driver_ids: Vec<Uuid>,
    ) -> AppResult<CarWithManufacturer>;

    async fn update(&self, id: Uuid, update: UpdateCar) -> AppResult<CarWithManufacturer>;

    /// Delete the car and its assignments.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Cars the driver is assigned to, in creation order.
    async fn list_for_driver(&self, driver_id: Uuid) -> AppResult<Vec<CarWithManufacturer>>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct CarStore {
    db: DatabaseConnection,
}

impl CarStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn ordered(select: Select<CarEntity>) -> Select<CarEntity> {
    select
        .order_by_asc(car::Column::CreatedAt)
        .order_by_asc(car::Column::Id)
}

/// The manufacturer join is inner by construction; a missing side is corruption.
fn join_row(
    (car, manufacturer): (car::Model, Option<manufacturer::Model>),
) -> AppResult<CarWithManufacturer> {
    let manufacturer = manufacturer.ok_or_else(|| {
        AppError::internal(format!("Car {} has no manufacturer", car.id))
    })?;
    Ok(CarWithManufacturer {
        car: Car::from(car),
        manufacturer: Manufacturer::from(manufacturer),
    })
}

async fn load_with_manufacturer<C: ConnectionTrait>(
    conn: &C,
    id: Uuid,
) -> AppResult<Option<CarWithManufacturer>> {
    CarEntity::find_by_id(id)
        .find_also_related(manufacturer::Entity)
        .one(conn)
        .await?
        .map(join_row)
        .transpose()
}

async fn require_manufacturer<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<()> {
    let exists = manufacturer::Entity::find_by_id(id).one(conn).await?.is_some();
    if !exists {
        return Err(AppError::validation(format!(
            "Manufacturer {} does not exist",
            id
        )));
    }
    Ok(())
}

#[async_trait]
impl CarRepository for CarStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<CarWithManufacturer>> {
        load_with_manufacturer(&self.db, id).await
    }

    async fn search(
        &self,
        search: &CarSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<CarWithManufacturer>> {
        let backend = self.db.get_database_backend();
        let condition = all_of([
            contains(backend, car::Column::Model, &search.model()),
            contains(backend, manufacturer::Column::Name, &search.manufacturer_name()),
        ]);
        let query = ordered(CarEntity::find())
            .find_also_related(manufacturer::Entity)
            .filter(condition);

        let page = fetch_page(query, &self.db, page).await?;
        let rows = page
            .data
            .into_iter()
            .map(join_row)
            .collect::<AppResult<Vec<_>>>()?;
        Ok(Paginated {
            data: rows,
            meta: page.meta,
        })
    }

    async fn create(
        &self,
        model: String,
        manufacturer_id: Uuid,
        driver_ids: Vec<Uuid>,
    ) -> AppResult<CarWithManufacturer> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                require_manufacturer(txn, manufacturer_id).await?;

                let now = chrono::Utc::now();
                let id = Uuid::new_v4();
                ActiveModel {
                    id: Set(id),
                    model: Set(model),
                    manufacturer_id: Set(manufacturer_id),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await
                .map_err(|e| AppError::from_write(e, ENTITY))?;

                replace_drivers(txn, id, driver_ids).await?;

                load_with_manufacturer(txn, id).await?.ok_or_not_found()
            })
        })
        .await
    }

    async fn update(&self, id: Uuid, update: UpdateCar) -> AppResult<CarWithManufacturer> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                let model = CarEntity::find_by_id(id).one(txn).await?.ok_or_not_found()?;

                let mut active: ActiveModel = model.into();
                if let Some(model) = update.model {
                    active.model = Set(model);
                }
                if let Some(manufacturer_id) = update.manufacturer_id {
                    require_manufacturer(txn, manufacturer_id).await?;
                    active.manufacturer_id = Set(manufacturer_id);
                }
                active.updated_at = Set(chrono::Utc::now());
                active
                    .update(txn)
                    .await
                    .map_err(|e| AppError::from_write(e, ENTITY))?;

                if let Some(driver_ids) = update.driver_ids {
                    replace_drivers(txn, id, driver_ids).await?;
                }

                load_with_manufacturer(txn, id).await?.ok_or_not_found()
            })
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                car_driver::Entity::delete_many()
                    .filter(car_driver::Column::CarId.eq(id))
                    .exec(txn)
                    .await?;

                let result = CarEntity::delete_by_id(id).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(AppError::NotFound);
                }
                Ok(())
            })
        })
        .await
    }

    async fn list_for_driver(&self, driver_id: Uuid) -> AppResult<Vec<CarWithManufacturer>> {
        let car_ids: Vec<Uuid> = car_driver::Entity::find()
            .filter(car_driver::Column::DriverId.eq(driver_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|row| row.car_id)
            .collect();

        if car_ids.is_empty() {
            return Ok(Vec::new());
        }

        ordered(CarEntity::find().filter(car::Column::Id.is_in(car_ids)))
            .find_also_related(manufacturer::Entity)
            .all(&self.db)
            .await?
            .into_iter()
            .map(join_row)
            .collect()
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(CarEntity::find().count(&self.db).await?)
    }
}
