//! Service container - builds every service over one shared UnitOfWork.

use std::sync::Arc;

use super::{
    AssignmentManager, AssignmentService, AuthService, Authenticator, CarManager, DriverManager,
    IndexManager, IndexService, ManufacturerManager,
};
use crate::config::Config;
use crate::infra::Persistence;

pub type Manufacturers = ManufacturerManager<Persistence>;
pub type Cars = CarManager<Persistence>;
pub type Drivers = DriverManager<Persistence>;

/// All application services, wired to the database.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthService>,
    pub assignments: Arc<dyn AssignmentService>,
    pub index: Arc<dyn IndexService>,
    pub manufacturers: Arc<Manufacturers>,
    pub cars: Arc<Cars>,
    pub drivers: Arc<Drivers>,
}

impl Services {
    pub fn from_connection(db: sea_orm::DatabaseConnection, config: Config) -> Self {
        let uow = Arc::new(Persistence::new(db));

        Self {
            auth: Arc::new(Authenticator::new(uow.clone(), config)),
            assignments: Arc::new(AssignmentManager::new(uow.clone())),
            index: Arc::new(IndexManager::new(uow.clone())),
            manufacturers: Arc::new(ManufacturerManager::new(uow.clone())),
            cars: Arc::new(CarManager::new(uow.clone())),
            drivers: Arc::new(DriverManager::new(uow)),
        }
    }
}
