use crate::{
    auth::CurrentUser,
    error::AppError,
    models::{task::INITIAL_STATUS, CreateTaskRequest, Task, TaskStatusUpdate},
};
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};
use serde_json::json;
use sqlx::PgPool;
use validator::Validate;

const TASK_COLUMNS: &str = "id, task, assignee_id, creator_id, status, priority, due_date";

/// Creates a new task.
///
/// The authenticated caller becomes the creator; the assignee comes from the
/// request body and controls the task from then on. The status is fixed to
/// `"pending"` at creation. The assignee id is not checked against existing
/// users beyond the foreign-key constraint.
///
/// ## Responses:
/// - `201 Created`: Returns the newly created `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `422 Unprocessable Entity`: If input validation fails (e.g. empty task text).
/// - `500 Internal Server Error`: For database errors, including an assignee
///   id that violates the foreign-key constraint.
#[post("/create-task")]
pub async fn create_task(
    pool: web::Data<PgPool>,
    task_data: web::Json<CreateTaskRequest>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let sql = format!(
        "INSERT INTO tasks (task, assignee_id, creator_id, status, priority, due_date)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING {}",
        TASK_COLUMNS
    );
    let task = sqlx::query_as::<_, Task>(&sql)
        .bind(&task_data.task)
        .bind(task_data.assignee_id)
        .bind(user.0.id)
        .bind(INITIAL_STATUS)
        .bind(&task_data.priority)
        .bind(task_data.due_date)
        .fetch_one(&**pool)
        .await?;

    Ok(HttpResponse::Created().json(task))
}

/// Retrieves the tasks assigned to the authenticated caller.
///
/// Ownership scoping is applied as a query filter: only rows whose
/// `assignee_id` matches the caller are returned. Tasks the caller created
/// but assigned to someone else do not appear.
///
/// ## Responses:
/// - `200 OK`: Returns a JSON array of `Task` objects.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `500 Internal Server Error`: For database errors.
#[get("/get-tasks")]
pub async fn get_tasks(
    pool: web::Data<PgPool>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let sql = format!(
        "SELECT {} FROM tasks WHERE assignee_id = $1 ORDER BY id",
        TASK_COLUMNS
    );
    let tasks = sqlx::query_as::<_, Task>(&sql)
        .bind(user.0.id)
        .fetch_all(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(tasks))
}

/// Updates the status of a task.
///
/// Only the assignee may update a task. A task that exists but is assigned
/// to someone else yields 403, so callers can distinguish "absent" from
/// "not yours".
///
/// ## Responses:
/// - `200 OK`: Returns the updated `Task` object as JSON.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `403 Forbidden`: If the task is assigned to a different user.
/// - `404 Not Found`: If no task with the given ID exists.
/// - `422 Unprocessable Entity`: If the new status is empty.
/// - `500 Internal Server Error`: For database errors.
#[put("/update-task/{task_id}")]
pub async fn update_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
    update: web::Json<TaskStatusUpdate>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    update.validate()?;
    let task_id = task_id.into_inner();

    let sql = format!("SELECT {} FROM tasks WHERE id = $1", TASK_COLUMNS);
    let task = sqlx::query_as::<_, Task>(&sql)
        .bind(task_id)
        .fetch_optional(&**pool)
        .await?;

    let task = match task {
        Some(task) => task,
        None => return Err(AppError::NotFound("Task not found".into())),
    };
    if !task.is_accessible_by(user.0.id) {
        return Err(AppError::Forbidden(
            "Task does not belong to the current user".into(),
        ));
    }

    let sql = format!(
        "UPDATE tasks SET status = $1 WHERE id = $2 RETURNING {}",
        TASK_COLUMNS
    );
    let updated = sqlx::query_as::<_, Task>(&sql)
        .bind(&update.status)
        .bind(task_id)
        .fetch_one(&**pool)
        .await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Deletes a single task owned by the caller.
///
/// The delete is scoped to the assignee in the query itself; a task that
/// exists but belongs to someone else is indistinguishable from an absent
/// one and yields 404.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Task deleted successfully"}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If no task matches both the ID and the caller.
/// - `500 Internal Server Error`: For database errors.
#[delete("/delete-task/{task_id}")]
pub async fn delete_task(
    pool: web::Data<PgPool>,
    task_id: web::Path<i32>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND assignee_id = $2")
        .bind(task_id.into_inner())
        .bind(user.0.id)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Task not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Task deleted successfully" })))
}

/// Deletes a batch of tasks owned by the caller.
///
/// Ids that do not exist or belong to someone else are silently skipped;
/// the matched subset is deleted with no per-id reporting. Only when nothing
/// matches at all does the request fail with 404.
///
/// ## Responses:
/// - `200 OK`: `{"message": "Tasks deleted successfully"}`.
/// - `401 Unauthorized`: If the request lacks a valid authentication token.
/// - `404 Not Found`: If none of the given IDs match a task of the caller.
/// - `500 Internal Server Error`: For database errors.
#[delete("/delete-tasks")]
pub async fn delete_tasks(
    pool: web::Data<PgPool>,
    task_ids: web::Json<Vec<i32>>,
    user: CurrentUser,
) -> Result<impl Responder, AppError> {
    let result = sqlx::query("DELETE FROM tasks WHERE id = ANY($1) AND assignee_id = $2")
        .bind(task_ids.into_inner())
        .bind(user.0.id)
        .execute(&**pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound("Tasks not found".into()));
    }

    Ok(HttpResponse::Ok().json(json!({ "message": "Tasks deleted successfully" })))
}
