/**
 * Server Initialization
 *
 * Turns a `ServerConfig` and a connected store into a ready-to-serve
 * router. The store is passed in rather than opened here so tests can
 * supply the in-memory implementation.
 */

use std::sync::Arc;

use axum::Router;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;
use crate::backend::users::store::UserStore;

/// Build application state from configuration
pub fn build_state(config: &ServerConfig, users: Arc<dyn UserStore>) -> AppState {
    AppState::new(
        users,
        SessionKeys::new(config.jwt_secret.as_bytes()),
        PasswordHasher::new(config.bcrypt_cost),
    )
}

/// Create and configure the Axum application
pub fn create_app(config: &ServerConfig, users: Arc<dyn UserStore>) -> Router<()> {
    tracing::info!("Initializing storefront backend");

    let app_state = build_state(config, users);
    let app = create_router(app_state, &config.http);

    tracing::info!("Router configured");
    app
}
