//! Driver use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppError, AppResult, OptionExt};
use domain::{
    CreateDriver, DriverDetail, DriverDetailResponse, DriverResponse, DriverSearch, LicenseNumber,
    NewDriver, Password, UpdateDriverLicense,
};

use super::resource::{Action, Resource};
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

/// Validate a registration payload and hash its password.
pub(crate) fn prepare_driver(payload: CreateDriver) -> AppResult<NewDriver> {
    let license_number = LicenseNumber::parse(&payload.license_number)?;
    let password_hash = Password::new(&payload.password)?.into_string();

    Ok(NewDriver {
        username: payload.username,
        password_hash,
        first_name: payload.first_name,
        last_name: payload.last_name,
        license_number,
    })
}

pub struct DriverManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> DriverManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }

    /// Driver with the cars assigned to them.
    pub async fn detail(&self, id: Uuid) -> AppResult<DriverDetail> {
        let driver = self.uow.drivers().find_by_id(id).await?.ok_or_not_found()?;
        let cars = self.uow.cars().list_for_driver(id).await?;
        Ok(DriverDetail { driver, cars })
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> Resource for DriverManager<U> {
    const NAME: &'static str = "driver";

    type Search = DriverSearch;
    type Create = CreateDriver;
    type Update = UpdateDriverLicense;
    type Summary = DriverResponse;
    type Detail = DriverDetailResponse;

    async fn list(
        &self,
        search: DriverSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<DriverResponse>> {
        let page = self.uow.drivers().search(&search, page).await?;
        Ok(page.map(DriverResponse::from))
    }

    async fn get(&self, id: Uuid) -> AppResult<DriverDetailResponse> {
        Ok(self.detail(id).await?.into())
    }

    async fn create(&self, payload: CreateDriver) -> AppResult<DriverDetailResponse> {
        let driver = self.uow.drivers().create(prepare_driver(payload)?).await?;
        tracing::info!(id = %driver.id, username = %driver.username, "Driver created");
        Ok(DriverDetail {
            driver,
            cars: Vec::new(),
        }
        .into())
    }

    async fn update(
        &self,
        id: Uuid,
        payload: UpdateDriverLicense,
    ) -> AppResult<DriverDetailResponse> {
        let license = LicenseNumber::parse(&payload.license_number)?;
        self.uow.drivers().update_license(id, license).await?;
        Ok(self.detail(id).await?.into())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.uow.drivers().delete(id).await?;
        tracing::info!(%id, "Driver deleted");
        Ok(())
    }

    fn authorize(&self, caller: Uuid, id: Uuid, _action: Action) -> AppResult<()> {
        if caller == id {
            Ok(())
        } else {
            Err(AppError::Forbidden)
        }
    }
}
