/**
 * API Routes
 *
 * ## Public
 * - `GET /api`, `GET /api/` - API index
 * - `POST /api/login` - Session token for form credentials
 *
 * ## Session required
 * - `POST /api/logout`
 *
 * ## Admin required
 * - `GET /api/users`, `POST /api/users`
 * - `GET /api/users/{id}`, `DELETE /api/users/{id}`
 */

use axum::{
    middleware::from_fn_with_state,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, logout};
use crate::backend::middleware::auth::{require_admin, require_session};
use crate::backend::server::state::AppState;
use crate::backend::users::{create_user, delete_user, get_user, list_users};
use crate::shared::MessageResponse;

/// GET /api
pub async fn api_index() -> Json<MessageResponse> {
    Json(MessageResponse::new("Uniform API"))
}

/// Add the `/api` routes to `router`
///
/// The gates are attached with `route_layer`, so unknown paths still fall
/// through to the router's fallback instead of answering 401.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let admin_routes = Router::new()
        .route("/api/users", get(list_users).post(create_user))
        .route("/api/users/{id}", get(get_user).delete(delete_user))
        .route_layer(from_fn_with_state(app_state.clone(), require_admin));

    let session_routes = Router::new()
        .route("/api/logout", post(logout))
        .route_layer(from_fn_with_state(app_state.clone(), require_session));

    router
        .route("/api", get(api_index))
        .route("/api/", get(api_index))
        .route("/api/login", post(login))
        .merge(session_routes)
        .merge(admin_routes)
}
