//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use axum::extract::FromRef;

use crate::config::Config;
use crate::infra::{Database, SessionStore};
use crate::services::{
    AssignmentService, AuthService, Cars, Drivers, IndexService, Manufacturers, Services,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<dyn AuthService>,
    pub assignment_service: Arc<dyn AssignmentService>,
    pub index_service: Arc<dyn IndexService>,
    pub manufacturers: Arc<Manufacturers>,
    pub cars: Arc<Cars>,
    pub drivers: Arc<Drivers>,
    /// Per-driver session state (Redis or in-process)
    pub sessions: Arc<dyn SessionStore>,
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire every service over `database`.
    pub fn from_config(
        database: Arc<Database>,
        sessions: Arc<dyn SessionStore>,
        config: Config,
    ) -> Self {
        let services = Services::from_connection(database.get_connection(), config);
        Self::new(services, sessions, database)
    }

    pub fn new(services: Services, sessions: Arc<dyn SessionStore>, database: Arc<Database>) -> Self {
        Self {
            auth_service: services.auth,
            assignment_service: services.assignments,
            index_service: services.index,
            manufacturers: services.manufacturers,
            cars: services.cars,
            drivers: services.drivers,
            sessions,
            database,
        }
    }
}

impl FromRef<AppState> for Arc<Manufacturers> {
    fn from_ref(state: &AppState) -> Self {
        state.manufacturers.clone()
    }
}

impl FromRef<AppState> for Arc<Cars> {
    fn from_ref(state: &AppState) -> Self {
        state.cars.clone()
    }
}

impl FromRef<AppState> for Arc<Drivers> {
    fn from_ref(state: &AppState) -> Self {
        state.drivers.clone()
    }
}
