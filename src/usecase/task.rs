use validator::Validate;

use crate::error::AppError;
use crate::models::{TaskInput, TaskResponse};
use crate::repository::TaskRepository;

/// Task operations, always scoped to the caller's id as derived from the
/// verified session — never from the request body. Mutations re-validate the
/// payload before touching storage and project rows to the response shape.
#[derive(Clone)]
pub struct TaskUsecase {
    repository: TaskRepository,
}

impl TaskUsecase {
    pub fn new(repository: TaskRepository) -> Self {
        Self { repository }
    }

    /// Returns the caller's tasks, oldest first. An owner with no tasks gets
    /// an empty list, not an error.
    pub async fn get_all(&self, user_id: i32) -> Result<Vec<TaskResponse>, AppError> {
        let tasks = self.repository.find_all(user_id).await?;
        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    pub async fn get_by_id(&self, user_id: i32, task_id: i32) -> Result<TaskResponse, AppError> {
        let task = self.repository.find_by_id(user_id, task_id).await?;
        Ok(task.into())
    }

    pub async fn create(&self, user_id: i32, input: TaskInput) -> Result<TaskResponse, AppError> {
        input.validate()?;
        let task = self.repository.create(user_id, &input.title).await?;
        Ok(task.into())
    }

    pub async fn update(
        &self,
        user_id: i32,
        task_id: i32,
        input: TaskInput,
    ) -> Result<TaskResponse, AppError> {
        input.validate()?;
        let task = self
            .repository
            .update_title(user_id, task_id, &input.title)
            .await?;
        Ok(task.into())
    }

    pub async fn delete(&self, user_id: i32, task_id: i32) -> Result<(), AppError> {
        self.repository.delete(user_id, task_id).await
    }
}
