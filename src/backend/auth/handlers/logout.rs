/**
 * Logout Handler
 *
 * POST /api/logout. Tokens are stateless and cannot be revoked, so this
 * only confirms the caller held a valid session.
 */

use axum::response::Json;

use crate::backend::middleware::auth::AuthUser;
use crate::shared::MessageResponse;

pub async fn logout(AuthUser(user): AuthUser) -> Json<MessageResponse> {
    tracing::info!("User logged out: {}", user.username);
    Json(MessageResponse::new("Logged out"))
}
