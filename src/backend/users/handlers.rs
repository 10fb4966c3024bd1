/**
 * User Handlers
 *
 * CRUD over `/api/users`. Every route here sits behind `require_admin`.
 * Responses are always `UserResponse` views; the password hash never leaves
 * the store layer.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::password::PasswordHasher;
use crate::backend::error::BackendError;
use crate::backend::middleware::auth::AuthUser;
use crate::backend::users::model::{parse_user_id, NewUser};
use crate::backend::users::store::UserStore;
use crate::shared::{CreateUserRequest, SharedError, UserListResponse, UserResponse};

const USER_NOT_FOUND: &str = "User not found";

/// GET /api/users
pub async fn list_users(
    State(users): State<Arc<dyn UserStore>>,
) -> Result<Json<UserListResponse>, BackendError> {
    let all = users.list().await?;
    Ok(Json(UserListResponse {
        users: all.iter().map(UserResponse::from).collect(),
    }))
}

/// POST /api/users
///
/// Returns 201 with the stored view. The request's plaintext password is
/// hashed before insert and is not echoed back.
pub async fn create_user(
    State(users): State<Arc<dyn UserStore>>,
    State(passwords): State<PasswordHasher>,
    AuthUser(admin): AuthUser,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResponse>), BackendError> {
    let Json(request) = body.map_err(|rejection| SharedError::malformed(rejection.body_text()))?;
    request.validate()?;

    let CreateUserRequest {
        username,
        password,
        email,
        admin: is_admin,
    } = request;
    let password_hash = passwords.spawn_hash(password).await?;
    let user = users
        .insert(NewUser {
            username: username.trim().to_string(),
            password_hash,
            email: email.trim().to_string(),
            admin: is_admin,
        })
        .await?;

    tracing::info!("User {} created by {}", user.username, admin.username);
    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// GET /api/users/{id}
pub async fn get_user(
    State(users): State<Arc<dyn UserStore>>,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, BackendError> {
    let user_id = parse_user_id(&id).ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;
    let user = users
        .find_by_id(&user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;
    Ok(Json(UserResponse::from(user)))
}

/// DELETE /api/users/{id}
///
/// Responds with the user as it was before deletion.
pub async fn delete_user(
    State(users): State<Arc<dyn UserStore>>,
    AuthUser(admin): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<UserResponse>, BackendError> {
    let user_id = parse_user_id(&id).ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;
    let user = users
        .delete(&user_id)
        .await?
        .ok_or_else(|| BackendError::not_found(USER_NOT_FOUND))?;

    tracing::info!("User {} deleted by {}", user.username, admin.username);
    Ok(Json(UserResponse::from(user)))
}
