//! JWT authentication middleware.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use common::AppError;
use domain::BEARER_TOKEN_PREFIX;

use crate::api::AppState;

/// Authenticated driver extracted from the JWT
#[derive(Clone, Debug)]
pub struct CurrentDriver {
    pub id: Uuid,
    pub username: String,
}

impl CurrentDriver {
    /// Session key for this driver's per-session state.
    pub fn session_key(&self) -> String {
        self.id.to_string()
    }
}

/// JWT authentication middleware.
///
/// Extracts and validates the JWT token from the Authorization header,
/// then injects the [`CurrentDriver`] into the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or(AppError::Unauthorized)?;

    let token = auth_header
        .strip_prefix(BEARER_TOKEN_PREFIX)
        .ok_or(AppError::Unauthorized)?;

    let claims = state
        .auth_service
        .verify_token(token)
        .map_err(|_| AppError::Unauthorized)?;

    request.extensions_mut().insert(CurrentDriver {
        id: claims.sub,
        username: claims.username,
    });

    Ok(next.run(request).await)
}
