/// Authentication endpoints
///
/// - `POST /api/v1/auth/sign-in` - Exchange email and password for a token

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::ValidatedJson,
};
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use taskboard_shared::{
    auth::{jwt, password},
    models::user::User,
};
use validator::Validate;

/// Message for both unknown emails and wrong passwords
pub const INVALID_CREDENTIALS: &str = "Incorrect credentials";

/// Sign-in request
#[derive(Debug, Deserialize, Validate)]
pub struct SignInRequest {
    #[validate(
        email(message = "Invalid email format"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub email: String,

    #[validate(
        length(min = 1, message = "Password is required"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub password: String,
}

/// Sign-in response
#[derive(Debug, Serialize, Deserialize)]
pub struct SignInResponse {
    /// Bearer token whose subject is the user's ID
    pub token: String,
}

/// Sign in
///
/// # Endpoint
///
/// ```text
/// POST /api/v1/auth/sign-in
/// Content-Type: application/json
///
/// {
///   "email": "test@example.com",
///   "password": "password123"
/// }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Errors
///
/// - `401 Unauthorized`: Unknown email or wrong password
/// - `422 Unprocessable Entity`: Missing or malformed fields
/// - `500 Internal Server Error`: Server error
pub async fn sign_in(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<SignInRequest>,
) -> ApiResult<Json<SignInResponse>> {
    let Some(user) = User::find_by_email(&state.db, &req.email).await? else {
        tracing::warn!("Sign-in attempted for unknown email");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    };

    if !password::verify_password(&req.password, &user.password_hash)? {
        tracing::warn!(user_id = user.id, "Sign-in rejected: wrong password");
        return Err(ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()));
    }

    let claims = jwt::Claims::new(user.id, state.token_lifetime());
    let token = jwt::create_token(&claims, state.jwt_secret())?;

    tracing::info!(user_id = user.id, "User signed in");

    Ok(Json(SignInResponse { token }))
}
