//! Redis cache and session storage.
//!
//! Session state lives behind the [`SessionStore`] trait. [`Cache`] keeps it in
//! Redis; [`MemorySessionStore`] keeps it in process when no Redis is
//! configured.

use std::collections::HashMap;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, Client, RedisError};
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::SessionState;

use crate::config::{CACHE_PREFIX_SESSION, SESSION_TTL_SECONDS};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

const NUM_VISITS_FIELD: &str = "num_visits";

/// Per-session state storage.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Count one visit for `session_id` and return the updated state.
    ///
    /// The increment is atomic: concurrent visits on one session each count.
    async fn record_visit(&self, session_id: &str) -> AppResult<SessionState>;
}

/// Redis cache wrapper with connection pooling.
#[derive(Clone)]
pub struct Cache {
    connection: ConnectionManager,
    session_ttl: u64,
}

impl Cache {
    pub async fn connect(redis_url: &str) -> Result<Self, RedisError> {
        let client = Client::open(redis_url)?;
        let connection = ConnectionManager::new(client).await?;
        tracing::info!("Redis cache connected");

        Ok(Self {
            connection,
            session_ttl: SESSION_TTL_SECONDS,
        })
    }

    /// Increment a hash field and refresh the key's TTL in one `MULTI`/`EXEC`.
    pub async fn incr_field_with_ttl(
        &self,
        key: &str,
        field: &str,
        ttl_seconds: u64,
    ) -> AppResult<u64> {
        let mut conn = self.connection.clone();
        let ttl = i64::try_from(ttl_seconds).unwrap_or(i64::MAX);

        let (value,): (u64,) = redis::pipe()
            .atomic()
            .hincr(key, field, 1)
            .expire(key, ttl)
            .ignore()
            .query_async(&mut conn)
            .await
            .map_err(cache_error)?;

        Ok(value)
    }
}

#[async_trait]
impl SessionStore for Cache {
    async fn record_visit(&self, session_id: &str) -> AppResult<SessionState> {
        let num_visits = self
            .incr_field_with_ttl(&session_key(session_id), NUM_VISITS_FIELD, self.session_ttl)
            .await?;
        Ok(SessionState { num_visits })
    }
}

/// In-process session store. State is lost on restart.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn record_visit(&self, session_id: &str) -> AppResult<SessionState> {
        let mut sessions = self.sessions.write().await;
        let state = sessions.entry(session_id.to_string()).or_default();
        *state = state.visited();
        Ok(*state)
    }
}

fn session_key(session_id: &str) -> String {
    format!("{}{}", CACHE_PREFIX_SESSION, session_id)
}

fn cache_error(e: RedisError) -> AppError {
    tracing::error!("Redis error: {}", e);
    AppError::Cache(e)
}
