//! Handlers for user registration and listing.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::users::{CreateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Registers a new user.
///
/// # Endpoint
///
/// `POST /api/users`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "Irmeli",
///   "name": "Irmeli Testaaja",
///   "password": "salainen"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the username or password is too short.
/// Returns 409 Conflict if the username is already taken.
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let CreateUserRequest {
        username,
        name,
        password,
    } = payload;

    let user = state.user_service.register(username, name, &password).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists all registered users.
///
/// # Endpoint
///
/// `GET /api/users`
///
/// # Response
///
/// A JSON array of users. Password hashes are never included.
pub async fn user_list_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
