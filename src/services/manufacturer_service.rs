//! Manufacturer use cases.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use common::{AppResult, OptionExt};
use domain::{CreateManufacturer, ManufacturerResponse, ManufacturerSearch, UpdateManufacturer};

use super::resource::Resource;
use crate::infra::UnitOfWork;
use crate::types::{Paginated, PaginationParams};

pub struct ManufacturerManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> ManufacturerManager<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork + 'static> Resource for ManufacturerManager<U> {
    const NAME: &'static str = "manufacturer";

    type Search = ManufacturerSearch;
    type Create = CreateManufacturer;
    type Update = UpdateManufacturer;
    type Summary = ManufacturerResponse;
    type Detail = ManufacturerResponse;

    async fn list(
        &self,
        search: ManufacturerSearch,
        page: PaginationParams,
    ) -> AppResult<Paginated<ManufacturerResponse>> {
        let page = self.uow.manufacturers().search(&search, page).await?;
        Ok(page.map(ManufacturerResponse::from))
    }

    async fn get(&self, id: Uuid) -> AppResult<ManufacturerResponse> {
        let manufacturer = self
            .uow
            .manufacturers()
            .find_by_id(id)
            .await?
            .ok_or_not_found()?;
        Ok(manufacturer.into())
    }

    async fn create(&self, payload: CreateManufacturer) -> AppResult<ManufacturerResponse> {
        let manufacturer = self
            .uow
            .manufacturers()
            .create(payload.name, payload.country)
            .await?;
        tracing::info!(id = %manufacturer.id, "Manufacturer created");
        Ok(manufacturer.into())
    }

    async fn update(
        &self,
        id: Uuid,
        payload: UpdateManufacturer,
    ) -> AppResult<ManufacturerResponse> {
        Ok(self.uow.manufacturers().update(id, payload).await?.into())
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.uow.manufacturers().delete(id).await?;
        tracing::info!(%id, "Manufacturer deleted with its cars");
        Ok(())
    }
}
