//! Driver repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::base::{all_of, any_of, contains, fetch_page};
use super::entities::{
    car_driver,
    driver::{self, ActiveModel, Entity as DriverEntity},
};
use crate::infra::unit_of_work::in_transaction;
use crate::types::{Paginated, PaginationParams};
use common::{AppError, AppResult, OptionExt};
use domain::{Driver, DriverSearch, LicenseNumber, NewDriver};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Driver>>;

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Driver>>;

    /// Matching drivers in creation order.
    async fn search(
        &self,
        search: &DriverSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<Driver>>;

    /// Insert a driver. Taken usernames and license numbers are conflicts.
    async fn create(&self, new: NewDriver) -> AppResult<Driver>;

    async fn update_license(&self, id: Uuid, license: LicenseNumber) -> AppResult<Driver>;

    /// Delete the driver and their assignments.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Drivers assigned to the car, in creation order.
    async fn list_for_car(&self, car_id: Uuid) -> AppResult<Vec<Driver>>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct DriverStore {
    db: DatabaseConnection,
}

impl DriverStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn license_taken<C: ConnectionTrait>(
    conn: &C,
    license: &LicenseNumber,
    except: Option<Uuid>,
) -> AppResult<bool> {
    let mut query =
        DriverEntity::find().filter(driver::Column::LicenseNumber.eq(license.as_str()));
    if let Some(id) = except {
        query = query.filter(driver::Column::Id.ne(id));
    }
    Ok(query.one(conn).await?.is_some())
}

#[async_trait]
impl DriverRepository for DriverStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Driver>> {
        let model = DriverEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Driver::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<Driver>> {
        let model = DriverEntity::find()
            .filter(driver::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(Driver::from))
    }

    async fn search(
        &self,
        search: &DriverSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<Driver>> {
        let backend = self.db.get_database_backend();
        let any = search.any_name();
        let mut condition = all_of([
            contains(backend, driver::Column::Username, &search.username()),
            contains(backend, driver::Column::FirstName, &search.first_name()),
        ]);
        if let Some(either) = any_of([
            contains(backend, driver::Column::Username, &any),
            contains(backend, driver::Column::FirstName, &any),
        ]) {
            condition = condition.add(either);
        }

        let query = DriverEntity::find()
            .filter(condition)
            .order_by_asc(driver::Column::CreatedAt)
            .order_by_asc(driver::Column::Id);

        Ok(fetch_page(query, &self.db, page).await?.map(Driver::from))
    }

    async fn create(&self, new: NewDriver) -> AppResult<Driver> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                let username_taken = DriverEntity::find()
                    .filter(driver::Column::Username.eq(new.username.as_str()))
                    .one(txn)
                    .await?
                    .is_some();
                if username_taken {
                    return Err(AppError::conflict("Username"));
                }
                if license_taken(txn, &new.license_number, None).await? {
                    return Err(AppError::conflict("License number"));
                }

                let now = chrono::Utc::now();
                let model = ActiveModel {
                    id: Set(Uuid::new_v4()),
                    username: Set(new.username),
                    password_hash: Set(new.password_hash),
                    first_name: Set(new.first_name),
                    last_name: Set(new.last_name),
                    license_number: Set(new.license_number.into_string()),
                    created_at: Set(now),
                    updated_at: Set(now),
                }
                .insert(txn)
                .await
                .map_err(|e| AppError::from_write(e, "Driver"))?;

                Ok(Driver::from(model))
            })
        })
        .await
    }

    async fn update_license(&self, id: Uuid, license: LicenseNumber) -> AppResult<Driver> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                let model = DriverEntity::find_by_id(id)
                    .one(txn)
                    .await?
                    .ok_or_not_found()?;

                if license_taken(txn, &license, Some(id)).await? {
                    return Err(AppError::conflict("License number"));
                }

                let mut active: ActiveModel = model.into();
                active.license_number = Set(license.into_string());
                active.updated_at = Set(chrono::Utc::now());

                let model = active
                    .update(txn)
                    .await
                    .map_err(|e| AppError::from_write(e, "License number"))?;
                Ok(Driver::from(model))
            })
        })
        .await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                car_driver::Entity::delete_many()
                    .filter(car_driver::Column::DriverId.eq(id))
                    .exec(txn)
                    .await?;

                let result = DriverEntity::delete_by_id(id).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(AppError::NotFound);
                }
                Ok(())
            })
        })
        .await
    }

    async fn list_for_car(&self, car_id: Uuid) -> AppResult<Vec<Driver>> {
        let driver_ids: Vec<Uuid> = car_driver::Entity::find()
            .filter(car_driver::Column::CarId.eq(car_id))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|row| row.driver_id)
            .collect();

        if driver_ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = DriverEntity::find()
            .filter(driver::Column::Id.is_in(driver_ids))
            .order_by_asc(driver::Column::CreatedAt)
            .order_by_asc(driver::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(Driver::from).collect())
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(DriverEntity::find().count(&self.db).await?)
    }
}
