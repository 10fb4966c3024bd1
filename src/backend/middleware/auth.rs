/**
 * Authentication Middleware
 *
 * Protects routes that need a session. The token comes from the
 * `Authorization` header, raw (a `Bearer ` prefix is tolerated), is verified,
 * and its subject must still name an existing user. The verified identity is
 * attached to the request extensions so handlers never repeat the lookup.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::error::BackendError;
use crate::backend::server::state::AppState;
use crate::backend::users::model::{parse_user_id, UserId};

/// Authenticated user data resolved from the session token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub username: String,
    /// Admin flag as stored at verification time
    pub admin: bool,
}

/// Pull the session token out of the `Authorization` header
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?.trim_start();
    let token = value.strip_prefix("Bearer ").unwrap_or(value).trim();
    (!token.is_empty()).then_some(token)
}

/// Resolve the caller's identity from the request headers
async fn authenticate(state: &AppState, headers: &HeaderMap) -> Result<AuthenticatedUser, BackendError> {
    let token = session_token(headers).ok_or_else(|| {
        tracing::warn!("Missing Authorization header");
        BackendError::unauthorized()
    })?;

    let claims = state.sessions.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        BackendError::unauthorized()
    })?;

    let user_id = parse_user_id(&claims.sub).ok_or_else(|| {
        tracing::warn!("Token subject is not a user id: {}", claims.sub);
        BackendError::unauthorized()
    })?;

    let user = state.users.find_by_id(&user_id).await?.ok_or_else(|| {
        tracing::warn!("Token subject no longer exists: {}", user_id);
        BackendError::unauthorized()
    })?;

    Ok(AuthenticatedUser {
        user_id: user.id,
        username: user.username,
        admin: user.admin,
    })
}

/// Require a valid session token
pub async fn require_session(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&app_state, request.headers()).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Require a valid session token belonging to an admin
pub async fn require_admin(
    State(app_state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let user = authenticate(&app_state, request.headers()).await?;
    if !user.admin {
        tracing::warn!("Non-admin user {} denied access to {}", user.username, request.uri().path());
        return Err(BackendError::unauthorized());
    }
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

/// Axum extractor for the user resolved by the middleware above
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{HeaderValue, Request};
    use mongodb::bson::oid::ObjectId;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_raw_token() {
        assert_eq!(session_token(&headers("abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn test_bearer_prefix_stripped() {
        assert_eq!(session_token(&headers("Bearer abc.def.ghi")), Some("abc.def.ghi"));
    }

    #[test]
    fn test_missing_or_empty_header() {
        assert_eq!(session_token(&HeaderMap::new()), None);
        assert_eq!(session_token(&headers("")), None);
        assert_eq!(session_token(&headers("Bearer ")), None);
    }

    #[tokio::test]
    async fn test_extractor_reads_extensions() {
        let user = AuthenticatedUser {
            user_id: ObjectId::new(),
            username: "grace".to_string(),
            admin: false,
        };
        let mut request = Request::builder().uri("/").body(()).unwrap();
        request.extensions_mut().insert(user.clone());
        let (mut parts, _) = request.into_parts();

        let AuthUser(extracted) = AuthUser::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(extracted, user);
    }

    #[tokio::test]
    async fn test_extractor_without_middleware_is_unauthorized() {
        let (mut parts, _) = Request::builder().uri("/").body(()).unwrap().into_parts();
        let result = AuthUser::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(BackendError::Unauthorized)));
    }
}
