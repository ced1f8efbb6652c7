use sqlx::PgPool;

use crate::error::AppError;
use crate::models::Task;

/// Data access for task rows.
///
/// Every query is scoped by `(id, user_id)` in the same predicate; ownership
/// is enforced purely by the filter, never by locking. A zero-row match on
/// update or delete reports "object does not exist" — intentionally the same
/// outcome whether the row is absent or belongs to another user.
#[derive(Clone)]
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All tasks owned by `user_id`, oldest first.
    pub async fn find_all(&self, user_id: i32) -> Result<Vec<Task>, AppError> {
        let tasks = sqlx::query_as::<_, Task>(
            "SELECT id, title, user_id, created_at, updated_at \
             FROM tasks WHERE user_id = $1 ORDER BY created_at",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(tasks)
    }

    pub async fn find_by_id(&self, user_id: i32, task_id: i32) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "SELECT id, title, user_id, created_at, updated_at \
             FROM tasks WHERE id = $1 AND user_id = $2",
        )
        .bind(task_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn create(&self, user_id: i32, title: &str) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, user_id) VALUES ($1, $2) \
             RETURNING id, title, user_id, created_at, updated_at",
        )
        .bind(title)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    pub async fn update_title(
        &self,
        user_id: i32,
        task_id: i32,
        title: &str,
    ) -> Result<Task, AppError> {
        let task = sqlx::query_as::<_, Task>(
            "UPDATE tasks SET title = $1, updated_at = now() \
             WHERE id = $2 AND user_id = $3 \
             RETURNING id, title, user_id, created_at, updated_at",
        )
        .bind(title)
        .bind(task_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        task.ok_or_else(|| AppError::NotFound("object does not exist".into()))
    }

    pub async fn delete(&self, user_id: i32, task_id: i32) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("object does not exist".into()));
        }

        Ok(())
    }
}
