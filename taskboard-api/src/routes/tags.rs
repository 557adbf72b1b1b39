/// Tag endpoints
///
/// - `GET /api/v1/tags` - First 15 tags
/// - `POST /api/v1/tags` - Create a tag

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    extract::ValidatedJson,
};
use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use taskboard_shared::models::tag::Tag;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTagRequest {
    #[validate(
        length(min = 1, max = 80, message = "Name must be 1-80 characters"),
        custom(function = "crate::extract::reject_nul")
    )]
    pub name: String,
}

/// Lists at most `tag::PAGE_SIZE` tags
pub async fn list_tags(State(state): State<AppState>) -> ApiResult<Json<Vec<Tag>>> {
    let tags = Tag::list(&state.db).await?;

    Ok(Json(tags))
}

/// Creates a tag
///
/// # Errors
///
/// - `409 Conflict`: Name already exists
/// - `422 Unprocessable Entity`: Missing or empty name
pub async fn create_tag(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateTagRequest>,
) -> ApiResult<(StatusCode, Json<Tag>)> {
    if Tag::name_exists(&state.db, &req.name).await? {
        return Err(ApiError::Conflict("Tag already registered".to_string()));
    }

    // A concurrent insert of the same name still lands on the unique constraint -> 409
    let tag = Tag::create(&state.db, &req.name).await?;

    tracing::info!(tag_id = tag.id, name = %tag.name, "Tag created");

    Ok((StatusCode::CREATED, Json(tag)))
}
