use axum::{Json, extract::State};
use serde::Deserialize;

use roster_application::{CreateUserCommand, CreateUserUseCase, UserResponse};
use roster_core::{UnitOfWork, UserRepository};

use super::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// `POST /users` - validate, persist and echo the new user.
#[tracing::instrument(name = "CreateUser", skip_all, fields(email = %request.email))]
pub async fn create_user<S>(
    State(store): State<S>,
    Json(request): Json<CreateUserRequest>,
) -> Result<Json<UserResponse>, ApiError>
where
    S: UserRepository + UnitOfWork + Clone + 'static,
{
    let use_case = CreateUserUseCase::new(&store, &store);

    let response = use_case
        .execute(CreateUserCommand {
            name: request.name,
            email: request.email,
        })
        .await?;

    Ok(Json(response))
}
