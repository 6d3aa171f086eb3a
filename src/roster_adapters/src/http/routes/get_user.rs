use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use roster_application::UserResponse;
use roster_core::{UserId, UserRepository};

use super::error::ApiError;

/// `GET /users/{id}` - fetch one user by identifier.
///
/// The id is taken as a raw path segment and parsed here so a malformed value
/// gets the same `{code, message}` body as every other client error.
#[tracing::instrument(name = "GetUser", skip(store))]
pub async fn get_user<S>(
    State(store): State<S>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, ApiError>
where
    S: UserRepository + Clone + 'static,
{
    let id = id.parse::<Uuid>().map_err(|_| ApiError::Validation {
        code: "User.InvalidId",
        message: "The user id must be a valid UUID.".to_owned(),
    })?;

    let user = store
        .get_by_id(UserId::from_uuid(id))
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(UserResponse::from(&user)))
}
