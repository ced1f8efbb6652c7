use validator::Validate;

use crate::auth::{generate_token, hash_password, verify_password};
use crate::error::AppError;
use crate::models::{Credentials, UserResponse};
use crate::repository::UserRepository;

/// Business rules for sign-up and login: validation, credential checks, and
/// session token construction. Transport and storage details live elsewhere.
#[derive(Clone)]
pub struct UserUsecase {
    repository: UserRepository,
    jwt_secret: String,
}

impl UserUsecase {
    pub fn new(repository: UserRepository, jwt_secret: impl Into<String>) -> Self {
        Self {
            repository,
            jwt_secret: jwt_secret.into(),
        }
    }

    /// Validates the credentials, hashes the password, and persists a new
    /// user. Returns only `{id, email}` — the hash is never echoed back.
    pub async fn sign_up(&self, credentials: Credentials) -> Result<UserResponse, AppError> {
        credentials.validate()?;

        if self
            .repository
            .find_by_email(&credentials.email)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest("email already registered".into()));
        }

        let password_hash = hash_password(&credentials.password)?;
        let user = self
            .repository
            .create(&credentials.email, &password_hash)
            .await?;

        Ok(user.into())
    }

    /// Checks the submitted credentials against the stored hash and mints a
    /// session token embedding the stored user's id.
    ///
    /// Unknown email and wrong password produce the same generic failure, so
    /// a caller cannot probe which addresses are registered.
    pub async fn login(&self, credentials: Credentials) -> Result<String, AppError> {
        credentials.validate()?;

        let user = self
            .repository
            .find_by_email(&credentials.email)
            .await?
            .ok_or_else(|| AppError::Unauthorized("invalid credentials".into()))?;

        if !verify_password(&credentials.password, &user.password_hash)? {
            return Err(AppError::Unauthorized("invalid credentials".into()));
        }

        generate_token(user.id, &self.jwt_secret)
    }
}
