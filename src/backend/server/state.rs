/**
 * Application State Management
 *
 * `AppState` is built once at startup and cloned into every request. Each
 * field is either an `Arc` or `Copy`, so cloning is cheap and nothing is
 * shared mutably.
 *
 * The `FromRef` implementations let handlers extract only the part they
 * need, e.g. `State(store): State<Arc<dyn UserStore>>`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::users::store::UserStore;

#[derive(Clone)]
pub struct AppState {
    /// User persistence (MongoDB in production, in-memory in tests)
    pub users: Arc<dyn UserStore>,

    /// Token signing and verification keys
    pub sessions: Arc<SessionKeys>,

    /// Password hashing parameters
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(users: Arc<dyn UserStore>, sessions: SessionKeys, passwords: PasswordHasher) -> Self {
        Self {
            users,
            sessions: Arc::new(sessions),
            passwords,
        }
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.users.clone()
    }
}

impl FromRef<AppState> for Arc<SessionKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.sessions.clone()
    }
}

impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.passwords
    }
}
