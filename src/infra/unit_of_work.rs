//! Unit of Work.
//!
//! Centralizes access to the repositories and owns the transaction helper
//! every multi-statement store operation runs through.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use common::{AppError, AppResult};

use super::repositories::{
    AssignmentRepository, AssignmentStore, CarRepository, CarStore, DriverRepository, DriverStore,
    ManufacturerRepository, ManufacturerStore,
};

/// Repository access for the service layer.
pub trait UnitOfWork: Send + Sync {
    fn manufacturers(&self) -> Arc<dyn ManufacturerRepository>;

    fn cars(&self) -> Arc<dyn CarRepository>;

    fn drivers(&self) -> Arc<dyn DriverRepository>;

    fn assignments(&self) -> Arc<dyn AssignmentRepository>;
}

/// Database-backed UnitOfWork
pub struct Persistence {
    manufacturers: Arc<ManufacturerStore>,
    cars: Arc<CarStore>,
    drivers: Arc<DriverStore>,
    assignments: Arc<AssignmentStore>,
}

impl Persistence {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            manufacturers: Arc::new(ManufacturerStore::new(db.clone())),
            cars: Arc::new(CarStore::new(db.clone())),
            drivers: Arc::new(DriverStore::new(db.clone())),
            assignments: Arc::new(AssignmentStore::new(db)),
        }
    }
}

impl UnitOfWork for Persistence {
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

/// Boxed future borrowing the open transaction.
pub type TxFuture<'a, T> = Pin<Box<dyn Future<Output = AppResult<T>> + Send + 'a>>;

/// Run `f` inside a transaction.
///
/// Commits when `f` succeeds, rolls back when it fails.
pub async fn in_transaction<F, T>(db: &DatabaseConnection, f: F) -> AppResult<T>
where
    F: for<'a> FnOnce(&'a DatabaseTransaction) -> TxFuture<'a, T> + Send,
    T: Send,
{
    let txn = db.begin().await.map_err(AppError::from)?;

    match f(&txn).await {
        Ok(result) => {
            txn.commit().await.map_err(AppError::from)?;
            Ok(result)
        }
        Err(e) => {
            if let Err(rollback_err) = txn.rollback().await {
                tracing::error!("Transaction rollback failed: {}", rollback_err);
            }
            Err(e)
        }
    }
}
