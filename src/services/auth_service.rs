//! Authentication - driver registration, login and token verification.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{CreateDriver, Driver, Password, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};

use super::driver_service::prepare_driver;
use crate::config::Config;
use crate::infra::UnitOfWork;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Driver id
    pub sub: Uuid,
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token response returned after successful authentication
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// JWT access token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub access_token: String,
    /// Token type (always "Bearer")
    #[schema(example = "Bearer")]
    pub token_type: String,
    /// Token lifetime in seconds
    #[schema(example = 86400)]
    pub expires_in: i64,
}

#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new driver account
    async fn register(&self, payload: CreateDriver) -> AppResult<Driver>;

    /// Exchange username and password for a JWT
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify JWT token and extract claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

fn generate_token(driver: &Driver, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours());

    let claims = Claims {
        sub: driver.id,
        username: driver.username.clone(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        access_token: token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours() * SECONDS_PER_HOUR,
    })
}

pub struct Authenticator<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> Authenticator<U> {
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

// Verified against when the username is unknown so both paths cost one hash
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$ZHVtbXloYXNoMTIzNDU2Nzg5MDEyMzQ1Njc4OTAxMg";

#[async_trait]
impl<U: UnitOfWork> AuthService for Authenticator<U> {
    async fn register(&self, payload: CreateDriver) -> AppResult<Driver> {
        let new = prepare_driver(payload)?;
        let driver = self.uow.drivers().create(new).await?;
        tracing::info!(id = %driver.id, username = %driver.username, "Driver registered");
        Ok(driver)
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let found = self.uow.drivers().find_by_username(&username).await?;

        let hash = found
            .as_ref()
            .map(|d| d.password_hash.clone())
            .unwrap_or_else(|| DUMMY_HASH.to_string());
        let password_valid = Password::from_hash(hash).verify(&password);

        match found {
            Some(driver) if password_valid => generate_token(&driver, &self.config),
            _ => {
                tracing::debug!(%username, "Login rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockDriverRepository;
    use crate::services::test_support::TestUnitOfWork;
    use domain::{LicenseNumber, NewDriver};

    fn stored_driver(password: &str) -> Driver {
        Driver::from_new(
            Uuid::new_v4(),
            NewDriver {
                username: "john".into(),
                password_hash: Password::new(password).unwrap().into_string(),
                first_name: "John".into(),
                last_name: "Smith".into(),
                license_number: LicenseNumber::parse("JON12345").unwrap(),
            },
        )
    }

    #[tokio::test]
    async fn test_login_issues_verifiable_token() {
        let driver = stored_driver("password123");
        let driver_id = driver.id;

        let mut drivers = MockDriverRepository::new();
        drivers
            .expect_find_by_username()
            .returning(move |_| Ok(Some(driver.clone())));

        let uow = TestUnitOfWork::default().with_drivers(drivers);
        let auth = Authenticator::new(Arc::new(uow), Config::default());

        let token = auth
            .login("john".into(), "password123".into())
            .await
            .unwrap();
        assert_eq!(token.token_type, "Bearer");

        let claims = auth.verify_token(&token.access_token).unwrap();
        assert_eq!(claims.sub, driver_id);
        assert_eq!(claims.username, "john");
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let driver = stored_driver("password123");
        let mut drivers = MockDriverRepository::new();
        drivers
            .expect_find_by_username()
            .returning(move |_| Ok(Some(driver.clone())));

        let uow = TestUnitOfWork::default().with_drivers(drivers);
        let auth = Authenticator::new(Arc::new(uow), Config::default());

        let result = auth.login("john".into(), "not-the-one".into()).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_login_unknown_user() {
        let mut drivers = MockDriverRepository::new();
        drivers.expect_find_by_username().returning(|_| Ok(None));

        let uow = TestUnitOfWork::default().with_drivers(drivers);
        let auth = Authenticator::new(Arc::new(uow), Config::default());

        let result = auth.login("ghost".into(), "password123".into()).await;
        assert!(matches!(result, Err(AppError::InvalidCredentials)));
    }

    #[test]
    fn test_garbage_token_rejected() {
        let auth = Authenticator::new(Arc::new(TestUnitOfWork::default()), Config::default());
        assert!(auth.verify_token("not.a.jwt").is_err());
    }
}
