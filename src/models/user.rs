use chrono::{DateTime, Utc};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

lazy_static! {
    // Minimal email shape check: something@something.tld, no whitespace.
    static ref EMAIL_REGEX: regex::Regex = regex::Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

/// A user row as stored in the database. The password is only ever held as a
/// bcrypt hash; the plaintext never reaches this struct.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sign-up / login request body.
#[derive(Debug, Deserialize, Validate)]
pub struct Credentials {
    #[validate(custom = "validate_email")]
    pub email: String,
    #[validate(custom = "validate_password")]
    pub password: String,
}

/// What sign-up returns to the client. The hash is never echoed back.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}

fn policy_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    if email.is_empty() {
        return Err(policy_error("email_required", "email is required"));
    }
    if email.chars().count() > 30 {
        return Err(policy_error("email_length", "limited max 30 char"));
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(policy_error("email_format", "is not valid email format"));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.is_empty() {
        return Err(policy_error("password_required", "password is required"));
    }
    let length = password.chars().count();
    if !(6..=30).contains(&length) {
        return Err(policy_error("password_length", "limited min 6 max 30 char"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_credentials() {
        assert!(credentials("test@example.com", "password123").validate().is_ok());
    }

    #[test]
    fn test_email_validation_messages() {
        let err = credentials("", "password123").validate().unwrap_err();
        assert!(err.to_string().contains("email is required"));

        let err = credentials("testexample.com", "password123")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("is not valid email format"));

        let long_email = format!("{}@example.com", "a".repeat(30));
        let err = credentials(&long_email, "password123").validate().unwrap_err();
        assert!(err.to_string().contains("limited max 30 char"));
    }

    #[test]
    fn test_password_validation_messages() {
        let err = credentials("test@example.com", "").validate().unwrap_err();
        assert!(err.to_string().contains("password is required"));

        let err = credentials("test@example.com", "12345").validate().unwrap_err();
        assert!(err.to_string().contains("limited min 6 max 30 char"));

        let err = credentials("test@example.com", &"a".repeat(31))
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("limited min 6 max 30 char"));
    }

    #[test]
    fn test_response_never_carries_the_hash() {
        let user = User {
            id: 1,
            email: "test@example.com".to_string(),
            password_hash: "$2b$10$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let response = UserResponse::from(user);
        let body = serde_json::to_string(&response).unwrap();
        assert!(!body.contains("password"));
        assert!(body.contains("test@example.com"));
    }
}
