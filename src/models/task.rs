use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A task row as stored in the database.
#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    /// Owning user. Never exposed in responses.
    pub user_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input structure for creating or updating a task.
///
/// Title policy: present, and at most 10 characters by character count (not
/// bytes), with a distinct message per violation.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct TaskInput {
    #[validate(custom = "validate_title")]
    pub title: String,
}

/// The response projection for a task: `{id, title, createdAt, updatedAt}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    pub id: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            created_at: task.created_at,
            updated_at: task.updated_at,
        }
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.is_empty() {
        let mut error = ValidationError::new("title_required");
        error.message = Some("title is required".into());
        return Err(error);
    }
    if title.chars().count() > 10 {
        let mut error = ValidationError::new("title_length");
        error.message = Some("limited max 10 char".into());
        return Err(error);
    }
    Ok(())
}
