/**
 * Login Handler
 *
 * POST /api/login with form fields `username` and `password`.
 *
 * 1. Look up user by username
 * 2. Verify password against the stored bcrypt hash
 * 3. Issue a 24 hour session token
 *
 * Unknown user and wrong password both answer 401 with the same body, after
 * the same amount of bcrypt work.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::Json,
    Form,
};

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::error::BackendError;
use crate::backend::users::store::UserStore;
use crate::shared::{LoginRequest, SharedError, TokenResponse};

pub async fn login(
    State(users): State<Arc<dyn UserStore>>,
    State(sessions): State<Arc<SessionKeys>>,
    State(passwords): State<PasswordHasher>,
    form: Result<Form<LoginRequest>, FormRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Form(request) = form.map_err(|rejection| SharedError::malformed(rejection.body_text()))?;
    tracing::info!("Login request for: {}", request.username);

    let user = users.find_by_username(&request.username).await?;

    // Unknown users still pay for a full verify
    let stored = user.as_ref().map(|user| user.password_hash.clone());
    let matched = passwords.spawn_verify(request.password, stored).await?;

    let user = match user {
        Some(user) if matched => user,
        Some(_) => {
            tracing::warn!("Invalid password for user: {}", request.username);
            return Err(BackendError::unauthorized());
        }
        None => {
            tracing::warn!("User not found: {}", request.username);
            return Err(BackendError::unauthorized());
        }
    };

    let token = sessions.issue(&user.id.to_hex())?;

    tracing::info!("User logged in successfully: {}", user.username);
    Ok(Json(TokenResponse { token }))
}
