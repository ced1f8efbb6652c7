use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Session tokens expire 12 hours after issuance. Note this is independent of
/// the session cookie's own 24-hour max-age; the token's expiry is what
/// actually bounds the session.
pub const SESSION_TTL_HOURS: i64 = 12;

/// Claims carried by a session token: the owner's id and the expiry. The user
/// id is the only payload claim; validity is purely signature plus expiry,
/// nothing is persisted server-side.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Signs a session token for the given user id with the server-held secret.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(SESSION_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("failed to generate token: {}", e)))
}

/// Verifies a session token's signature and expiry and decodes its claims.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::Unauthorized(format!("invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const TEST_SECRET: &str = "test_secret_for_gen_verify";

    #[test]
    fn test_token_generation_and_verification() {
        let user_id = 1;
        let token = generate_token(user_id, TEST_SECRET).unwrap();
        let claims = verify_token(&token, TEST_SECRET).unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_token_expiry_is_twelve_hours_out() {
        let before = chrono::Utc::now().timestamp() as usize;
        let token = generate_token(3, TEST_SECRET).unwrap();
        let after = chrono::Utc::now().timestamp() as usize;
        let claims = verify_token(&token, TEST_SECRET).unwrap();

        let twelve_hours = (SESSION_TTL_HOURS * 3600) as usize;
        assert!(claims.exp >= before + twelve_hours);
        assert!(claims.exp <= after + twelve_hours);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims_expired = Claims {
            sub: 2,
            exp: expiration,
        };
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
        )
        .unwrap();

        match verify_token(&expired_token, TEST_SECRET) {
            Err(AppError::Unauthorized(msg)) => {
                assert!(msg.contains("ExpiredSignature"), "unexpected message: {}", msg);
            }
            Ok(_) => panic!("token should have been invalid due to expiration"),
            Err(e) => panic!("unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = generate_token(5, TEST_SECRET).unwrap();
        match verify_token(&token, "a_completely_different_secret") {
            Err(AppError::Unauthorized(msg)) => {
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "unexpected message: {}",
                    msg
                );
            }
            Ok(_) => panic!("token should have been invalid due to signature mismatch"),
            Err(e) => panic!("unexpected error type for invalid signature: {:?}", e),
        }
    }

    #[test]
    fn test_empty_secret_still_roundtrips() {
        // Degraded mode when SECRET is unset: an empty key signs and verifies
        // consistently. Weak, but startup does not fail.
        let token = generate_token(9, "").unwrap();
        let claims = verify_token(&token, "").unwrap();
        assert_eq!(claims.sub, 9);
        assert!(verify_token(&token, "nonempty").is_err());
    }
}
