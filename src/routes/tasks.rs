use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use crate::auth::AuthenticatedUserId;
use crate::error::AppError;
use crate::models::TaskInput;
use crate::usecase::TaskUsecase;

/// Lists the authenticated user's tasks, oldest first.
///
/// ## Responses:
/// - `200 OK`: JSON array of `{id, title, createdAt, updatedAt}` — empty if
///   the user has no tasks.
/// - `401 Unauthorized`: missing or invalid session (rejected by middleware).
/// - `500 Internal Server Error`: store faults.
#[get("")]
pub async fn get_tasks(
    usecase: web::Data<TaskUsecase>,
    user: AuthenticatedUserId,
) -> Result<impl Responder, AppError> {
    let tasks = usecase.get_all(user.0).await?;
    Ok(HttpResponse::Ok().json(tasks))
}

/// Fetches a single task by id, scoped to the authenticated owner.
///
/// A task owned by someone else is indistinguishable from one that does not
/// exist: both are `404 Not Found`.
#[get("/{task_id}")]
pub async fn get_task(
    usecase: web::Data<TaskUsecase>,
    user: AuthenticatedUserId,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    let task = usecase.get_by_id(user.0, task_id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Creates a task for the authenticated user.
///
/// ## Responses:
/// - `201 Created`: the created task projection.
/// - `400 Bad Request`: malformed body.
/// - `422 Unprocessable Entity`: title violates policy.
#[post("")]
pub async fn create_task(
    usecase: web::Data<TaskUsecase>,
    user: AuthenticatedUserId,
    body: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = usecase.create(user.0, body.into_inner()).await?;
    Ok(HttpResponse::Created().json(task))
}

/// Updates a task's title.
///
/// ## Responses:
/// - `200 OK`: the updated task projection.
/// - `404 Not Found`: the owner-scoped filter matched no row ("object does
///   not exist" — absent and non-owned are conflated by design).
/// - `422 Unprocessable Entity`: title violates policy.
#[put("/{task_id}")]
pub async fn update_task(
    usecase: web::Data<TaskUsecase>,
    user: AuthenticatedUserId,
    task_id: web::Path<i32>,
    body: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    let task = usecase
        .update(user.0, task_id.into_inner(), body.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(task))
}

/// Deletes a task the authenticated user owns.
///
/// ## Responses:
/// - `204 No Content`: deleted.
/// - `404 Not Found`: no owner-scoped row matched.
#[delete("/{task_id}")]
pub async fn delete_task(
    usecase: web::Data<TaskUsecase>,
    user: AuthenticatedUserId,
    task_id: web::Path<i32>,
) -> Result<impl Responder, AppError> {
    usecase.delete(user.0, task_id.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
