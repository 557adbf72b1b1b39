/// Task endpoints
///
/// All routes require a JWT and only ever see the caller's own tasks; a task
/// owned by someone else answers 404 exactly like a missing one.
///
/// - `GET /api/v1/tasks/user` - List the caller's tasks with tag names
/// - `POST /api/v1/tasks` - Create a task
/// - `PUT /api/v1/tasks/:id` - Replace title, content and status
/// - `DELETE /api/v1/tasks/:id` - Delete a task

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::{ValidatedJson, ValidatedPath},
};
use axum::{
    extract::State,
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use taskboard_shared::{
    auth::middleware::AuthContext,
    models::task::{CreateTask, Task, TaskStatus, TaskWithTag, UpdateTask},
};
use validator::Validate;

const TASK_NOT_FOUND: &str = "Task not found";

/// Create task request
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub title: String,

    #[validate(custom(function = "crate::extract::reject_nul"))]
    pub content: String,

    /// Defaults to `PENDING`
    #[serde(default)]
    pub status: Option<TaskStatus>,

    #[serde(alias = "tag_id")]
    pub tag_id: i64,
}

/// Update task request; every field is replaced
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[validate(
        length(min = 1, max = 255, message = "Title must be 1-255 characters"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub title: String,

    #[validate(custom(function = "crate::extract::reject_nul"))]
    pub content: String,

    pub status: TaskStatus,
}

/// Lists the caller's tasks, oldest first, each with its tag name
pub async fn list_user_tasks(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<Json<Vec<TaskWithTag>>> {
    let tasks = Task::list_by_user(&state.db, auth.user_id).await?;

    Ok(Json(tasks))
}

/// Creates a task owned by the caller
///
/// # Endpoint
///
/// ```text
/// POST /api/v1/tasks
/// Authorization: Bearer <jwt_token>
///
/// {
///   "title": "New Task",
///   "content": "Task content",
///   "status": "PENDING",
///   "tagId": 1
/// }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or rejected token
/// - `422 Unprocessable Entity`: Validation failed, or `tagId` names no tag
pub async fn create_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ValidatedJson(req): ValidatedJson<CreateTaskRequest>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = Task::create(
        &state.db,
        CreateTask {
            title: req.title,
            content: req.content,
            status: req.status.unwrap_or_default(),
            user_id: auth.user_id,
            tag_id: req.tag_id,
        },
    )
    .await?;

    tracing::info!(task_id = task.id, user_id = auth.user_id, "Task created");

    Ok((StatusCode::CREATED, Json(task)))
}

/// Replaces a task's title, content and status
///
/// # Errors
///
/// - `404 Not Found`: No such task for the caller
pub async fn update_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(req): ValidatedJson<UpdateTaskRequest>,
) -> ApiResult<Json<Task>> {
    let task = Task::update_for_user(
        &state.db,
        id,
        auth.user_id,
        UpdateTask {
            title: req.title,
            content: req.content,
            status: req.status,
        },
    )
    .await?
    .ok_or_else(|| ApiError::NotFound(TASK_NOT_FOUND.to_string()))?;

    Ok(Json(task))
}

/// Deletes one of the caller's tasks
///
/// # Errors
///
/// - `404 Not Found`: No such task for the caller
pub async fn delete_task(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> ApiResult<StatusCode> {
    if !Task::delete_for_user(&state.db, id, auth.user_id).await? {
        return Err(ApiError::NotFound(TASK_NOT_FOUND.to_string()));
    }

    tracing::info!(task_id = id, user_id = auth.user_id, "Task deleted");

    Ok(StatusCode::NO_CONTENT)
}
