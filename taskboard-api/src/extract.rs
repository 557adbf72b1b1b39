/// Request extractors
///
/// [`ValidatedJson`] deserializes a JSON body and runs its `validator` rules.
/// Missing fields, wrong types, unparseable JSON and rule violations all come
/// back as 422 with per-field details. [`ValidatedPath`] does the same for
/// path parameters.
///
/// # Example
///
/// ```no_run
/// use axum::Json;
/// use serde::Deserialize;
/// use taskboard_api::{error::ApiResult, extract::ValidatedJson};
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateTagRequest {
///     #[validate(length(min = 1, max = 80))]
///     name: String,
/// }
///
/// async fn handler(ValidatedJson(req): ValidatedJson<CreateTagRequest>) -> ApiResult<Json<String>> {
///     Ok(Json(req.name))
/// }
/// ```

use crate::error::ApiError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// JSON body that has passed validation
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters that parsed into `T`
///
/// `/tasks/abc` where an integer is expected is a 422 with a JSON body
/// instead of axum's plain-text 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedPath<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state).await?;

        Ok(ValidatedPath(value))
    }
}

/// Rejects strings containing NUL, which PostgreSQL cannot store in text columns
pub fn reject_nul(value: &str) -> Result<(), ValidationError> {
    if !value.contains('\0') {
        return Ok(());
    }

    let mut err = ValidationError::new("nul_character");
    err.message = Some(Cow::Borrowed("Must not contain NUL characters"));
    Err(err)
}
