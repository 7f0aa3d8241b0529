//! Generic resource contract.
//!
//! Every entity exposed over HTTP implements [`Resource`]; the API layer wires
//! all of them with the same handlers.

use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use uuid::Uuid;
use validator::Validate;

use common::AppResult;

use crate::types::{Paginated, PaginationParams};

/// Mutations subject to [`Resource::authorize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Update,
    Delete,
}

#[async_trait]
pub trait Resource: Send + Sync + 'static {
    /// Display name used in logs
    const NAME: &'static str;

    /// Query-string filter for listings
    type Search: DeserializeOwned + Send + Sync + 'static;
    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;
    /// Listing row
    type Summary: Serialize + Send + 'static;
    /// Single-record view
    type Detail: Serialize + Send + 'static;

    async fn list(
        &self,
        search: Self::Search,
        page: PaginationParams,
    ) -> AppResult<Paginated<Self::Summary>>;

    async fn get(&self, id: Uuid) -> AppResult<Self::Detail>;

    async fn create(&self, payload: Self::Create) -> AppResult<Self::Detail>;

    async fn update(&self, id: Uuid, payload: Self::Update) -> AppResult<Self::Detail>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Whether `caller` may perform `action` on record `id`.
    fn authorize(&self, _caller: Uuid, _id: Uuid, _action: Action) -> AppResult<()> {
        Ok(())
    }
}
