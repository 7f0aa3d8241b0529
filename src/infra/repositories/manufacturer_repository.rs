//! Manufacturer repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::base::{contains, fetch_page};
use super::entities::{
    car, car_driver,
    manufacturer::{self, ActiveModel, Entity as ManufacturerEntity},
};
use crate::infra::unit_of_work::in_transaction;
use crate::types::{Paginated, PaginationParams};
use common::{AppError, AppResult, OptionExt};
use domain::{Manufacturer, ManufacturerSearch, UpdateManufacturer};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const ENTITY: &str = "Manufacturer";

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ManufacturerRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manufacturer>>;

    /// Matching manufacturers in creation order.
    async fn search(
        &self,
        search: &ManufacturerSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<Manufacturer>>;

    async fn create(&self, name: String, country: String) -> AppResult<Manufacturer>;

    async fn update(&self, id: Uuid, update: UpdateManufacturer) -> AppResult<Manufacturer>;

    /// Delete the manufacturer together with its cars and their assignments.
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    async fn count(&self) -> AppResult<u64>;
}

pub struct ManufacturerStore {
    db: DatabaseConnection,
}

impl ManufacturerStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ManufacturerRepository for ManufacturerStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Manufacturer>> {
        let model = ManufacturerEntity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Manufacturer::from))
    }

    async fn search(
        &self,
        search: &ManufacturerSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<Manufacturer>> {
        let backend = self.db.get_database_backend();
        let mut query = ManufacturerEntity::find();
        if let Some(expr) = contains(backend, manufacturer::Column::Name, &search.name()) {
            query = query.filter(expr);
        }
        let query = query
            .order_by_asc(manufacturer::Column::CreatedAt)
            .order_by_asc(manufacturer::Column::Id);

        Ok(fetch_page(query, &self.db, page).await?.map(Manufacturer::from))
    }

    async fn create(&self, name: String, country: String) -> AppResult<Manufacturer> {
        let now = chrono::Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            country: Set(country),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, ENTITY))?;
        Ok(Manufacturer::from(model))
    }

    async fn update(&self, id: Uuid, update: UpdateManufacturer) -> AppResult<Manufacturer> {
        let model = ManufacturerEntity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_not_found()?;

        let mut active: ActiveModel = model.into();
        if let Some(name) = update.name {
            active.name = Set(name);
        }
        if let Some(country) = update.country {
            active.country = Set(country);
        }
        active.updated_at = Set(chrono::Utc::now());

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_write(e, ENTITY))?;
        Ok(Manufacturer::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                let car_ids: Vec<Uuid> = car::Entity::find()
                    .filter(car::Column::ManufacturerId.eq(id))
                    .all(txn)
                    .await?
                    .into_iter()
                    .map(|c| c.id)
                    .collect();

                if !car_ids.is_empty() {
                    car_driver::Entity::delete_many()
                        .filter(car_driver::Column::CarId.is_in(car_ids))
                        .exec(txn)
                        .await?;
                    car::Entity::delete_many()
                        .filter(car::Column::ManufacturerId.eq(id))
                        .exec(txn)
                        .await?;
                }

                let result = ManufacturerEntity::delete_by_id(id).exec(txn).await?;
                if result.rows_affected == 0 {
                    return Err(AppError::NotFound);
                }
                Ok(())
            })
        })
        .await
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(ManufacturerEntity::find().count(&self.db).await?)
    }
}
