/// User endpoints
///
/// - `GET /api/v1/users` - List users
/// - `GET /api/v1/users/:id` - Fetch one user
/// - `POST /api/v1/users` - Register
/// - `DELETE /api/v1/users/account` - Delete the caller's own account (JWT)

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
    auth::{middleware::AuthContext, password},
    models::user::{CreateUser, User},
};
use validator::Validate;

/// Registration request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        length(min = 1, max = 80, message = "Username must be 1-80 characters"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub username: String,

    #[validate(
        email(message = "Invalid email format"),
        length(max = 255, message = "Email must be at most 255 characters"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub password: String,
}

/// Lists all users in registration order
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = User::list(&state.db).await?;

    Ok(Json(users))
}

/// Fetches a user by ID
///
/// # Errors
///
/// - `404 Not Found`: No such user
pub async fn get_user(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> ApiResult<Json<User>> {
    let user = User::find_by_id(&state.db, id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user))
}

/// Registers a user
///
/// # Endpoint
///
/// ```text
/// POST /api/v1/users
/// Content-Type: application/json
///
/// {
///   "username": "newuser",
///   "email": "newuser@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "id": 1, "username": "newuser", "email": "newuser@example.com" }`
///
/// # Errors
///
/// - `409 Conflict`: Username taken (checked first), or email taken
/// - `422 Unprocessable Entity`: Validation failed
/// - `500 Internal Server Error`: Server error
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let mut tx = state.db.begin().await?;

    if User::username_exists(&mut *tx, &req.username).await? {
        return Err(ApiError::Conflict("Username already registered".to_string()));
    }

    if User::email_exists(&mut *tx, &req.email).await? {
        return Err(ApiError::Conflict("Email already registered".to_string()));
    }

    let password_hash = password::hash_password(&req.password)?;

    let user = User::create(
        &mut *tx,
        CreateUser {
            username: req.username,
            email: req.email,
            password_hash,
        },
    )
    .await?;

    tx.commit().await?;

    tracing::info!(user_id = user.id, "User registered");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Deletes the authenticated user's account and, by cascade, their tasks
///
/// # Errors
///
/// - `401 Unauthorized`: Missing or rejected token
/// - `404 Not Found`: Account already deleted
/// - `422 Unprocessable Entity`: Undecodable token
pub async fn delete_account(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthContext>,
) -> ApiResult<StatusCode> {
    if !User::delete(&state.db, auth.user_id).await? {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    tracing::info!(user_id = auth.user_id, "User account deleted");

    Ok(StatusCode::NO_CONTENT)
}
