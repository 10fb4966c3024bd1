/**
 * Transport Security
 *
 * Host header guard and the fixed set of security headers added to every
 * response.
 */

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{
        header::{self, HeaderName, HOST},
        HeaderValue, StatusCode,
    },
    middleware::Next,
    response::Response,
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::backend::error::BackendError;

const CONTENT_SECURITY_POLICY: &str = "default-src 'self'; connect-src *; font-src *; script-src-elem * 'unsafe-inline'; img-src * data:; style-src * 'unsafe-inline';";
const PERMISSIONS_POLICY: &str = "geolocation=(),midi=(),sync-xhr=(),microphone=(),camera=(),magnetometer=(),gyroscope=(),fullscreen=(self),payment=()";

/// Expected `Host` header value, if the guard is enabled
#[derive(Clone, Debug, Default)]
pub struct HostGuard(pub Option<Arc<str>>);

impl HostGuard {
    pub fn new(expected: Option<&str>) -> Self {
        Self(expected.map(Arc::from))
    }
}

/// Reject requests addressed to an unexpected host
pub async fn enforce_host(
    State(guard): State<HostGuard>,
    request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    if let Some(expected) = guard.0.as_deref() {
        let host = request.headers().get(HOST).and_then(|h| h.to_str().ok());
        if host != Some(expected) {
            tracing::warn!("Rejected request for host {:?}", host);
            return Err(BackendError::handler(StatusCode::BAD_REQUEST, "Invalid host header"));
        }
    }
    Ok(next.run(request).await)
}

/// Add the security response headers to every route of `router`
pub fn with_security_headers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    let headers: [(HeaderName, &'static str); 7] = [
        (header::X_FRAME_OPTIONS, "DENY"),
        (header::CONTENT_SECURITY_POLICY, CONTENT_SECURITY_POLICY),
        (header::X_XSS_PROTECTION, "1; mode=block"),
        (
            header::STRICT_TRANSPORT_SECURITY,
            "max-age=31536000; includeSubDomains; preload",
        ),
        (header::REFERRER_POLICY, "strict-origin"),
        (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        (HeaderName::from_static("permissions-policy"), PERMISSIONS_POLICY),
    ];

    headers.into_iter().fold(router, |router, (name, value)| {
        router.layer(SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value)))
    })
}
