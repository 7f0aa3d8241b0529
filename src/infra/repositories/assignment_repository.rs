//! Driver-car assignment repository.
//!
//! The relation has set semantics: at most one row per (car, driver).

use async_trait::async_trait;
use sea_orm::{
    sea_query::OnConflict, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::{car, car_driver, driver};
use crate::infra::unit_of_work::in_transaction;
use common::{AppError, AppResult};
use domain::Assignment;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Flip membership of the driver in the car's driver set.
    ///
    /// Missing car or driver is `NotFound`.
    async fn toggle(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<Assignment>;

    /// Add the pair; no-op if already present.
    async fn assign(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<()>;

    /// Remove the pair; no-op if absent.
    async fn unassign(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<()>;

    async fn is_assigned(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<bool>;
}

pub struct AssignmentStore {
    db: DatabaseConnection,
}

impl AssignmentStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

async fn require_pair<C: ConnectionTrait>(conn: &C, car_id: Uuid, driver_id: Uuid) -> AppResult<()> {
    if car::Entity::find_by_id(car_id).one(conn).await?.is_none() {
        return Err(AppError::NotFound);
    }
    if driver::Entity::find_by_id(driver_id).one(conn).await?.is_none() {
        return Err(AppError::NotFound);
    }
    Ok(())
}

/// Insert the pair unless it exists. Returns rows inserted.
async fn insert_pair<C: ConnectionTrait>(conn: &C, car_id: Uuid, driver_id: Uuid) -> AppResult<u64> {
    let inserted = car_driver::Entity::insert(car_driver::ActiveModel {
        car_id: Set(car_id),
        driver_id: Set(driver_id),
    })
    .on_conflict(
        OnConflict::columns([car_driver::Column::CarId, car_driver::Column::DriverId])
            .do_nothing()
            .to_owned(),
    )
    .exec_without_returning(conn)
    .await?;
    Ok(inserted)
}

/// Delete the pair. Returns rows removed.
async fn delete_pair<C: ConnectionTrait>(conn: &C, car_id: Uuid, driver_id: Uuid) -> AppResult<u64> {
    let result = car_driver::Entity::delete_many()
        .filter(car_driver::Column::CarId.eq(car_id))
        .filter(car_driver::Column::DriverId.eq(driver_id))
        .exec(conn)
        .await?;
    Ok(result.rows_affected)
}

/// Replace the car's driver set. Unknown driver ids are a validation error.
pub(crate) async fn replace_drivers<C: ConnectionTrait>(
    conn: &C,
    car_id: Uuid,
    mut driver_ids: Vec<Uuid>,
) -> AppResult<()> {
    driver_ids.sort_unstable();
    driver_ids.dedup();

    if !driver_ids.is_empty() {
        let known = driver::Entity::find()
            .filter(driver::Column::Id.is_in(driver_ids.clone()))
            .count(conn)
            .await?;
        if known != driver_ids.len() as u64 {
            return Err(AppError::validation("driver_ids contains an unknown driver"));
        }
    }

    car_driver::Entity::delete_many()
        .filter(car_driver::Column::CarId.eq(car_id))
        .exec(conn)
        .await?;

    if !driver_ids.is_empty() {
        car_driver::Entity::insert_many(driver_ids.into_iter().map(|driver_id| {
            car_driver::ActiveModel {
                car_id: Set(car_id),
                driver_id: Set(driver_id),
            }
        }))
        .exec_without_returning(conn)
        .await?;
    }

    Ok(())
}

#[async_trait]
impl AssignmentRepository for AssignmentStore {
    async fn toggle(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<Assignment> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                require_pair(txn, car_id, driver_id).await?;

                if delete_pair(txn, car_id, driver_id).await? > 0 {
                    return Ok(Assignment::Unassigned);
                }
                insert_pair(txn, car_id, driver_id).await?;
                Ok(Assignment::Assigned)
            })
        })
        .await
    }

    async fn assign(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<()> {
        in_transaction(&self.db, |txn| {
            Box::pin(async move {
                require_pair(txn, car_id, driver_id).await?;
                insert_pair(txn, car_id, driver_id).await?;
                Ok(())
            })
        })
        .await
    }

    async fn unassign(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<()> {
        delete_pair(&self.db, car_id, driver_id).await?;
        Ok(())
    }

    async fn is_assigned(&self, car_id: Uuid, driver_id: Uuid) -> AppResult<bool> {
        let row = car_driver::Entity::find_by_id((car_id, driver_id))
            .one(&self.db)
            .await?;
        Ok(row.is_some())
    }
}
