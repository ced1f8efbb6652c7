use crate::error::AppError;
use bcrypt::{hash, verify};

// Matches the cost the password hashes in existing deployments were created
// with.
const BCRYPT_COST: u32 = 10;

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, BCRYPT_COST)
        .map_err(|e| AppError::InternalServerError(format!("failed to hash password: {}", e)))
}

/// Compares a plaintext password against a stored bcrypt hash. The comparison
/// inside bcrypt is constant-time.
pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::InternalServerError(format!("failed to verify password: {}", e)))
}
