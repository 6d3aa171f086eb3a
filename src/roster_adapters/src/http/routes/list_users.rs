use axum::Json;
use axum::extract::State;

use roster_application::UserResponse;
use roster_core::UserRepository;

use super::error::ApiError;

/// `GET /users` - list every committed user.
#[tracing::instrument(name = "ListUsers", skip_all)]
pub async fn list_users<S>(State(store): State<S>) -> Result<Json<Vec<UserResponse>>, ApiError>
where
    S: UserRepository + Clone + 'static,
{
    let users = store.get_all().await?;

    Ok(Json(users.iter().map(UserResponse::from).collect()))
}
