/**
 * Router Configuration
 *
 * Combines the API routes, static file fallback and transport layers into
 * one Axum router.
 *
 * # Layer Order (outermost first)
 *
 * 1. Request tracing
 * 2. Security response headers
 * 3. Panic recovery (500)
 * 4. Request timeout (408)
 * 5. Host guard (400 when `EXPECTED_HOST` is set and does not match)
 *
 * The headers wrap panic recovery and the timeout so 500 and 408 responses
 * carry them too.
 */

use axum::{http::StatusCode, middleware::from_fn_with_state, Router};
use tower_http::{
    catch_panic::CatchPanicLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

use crate::backend::middleware::security::{enforce_host, with_security_headers, HostGuard};
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::config::HttpConfig;
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, http: &HttpConfig) -> Router<()> {
    let router = configure_api_routes(Router::new(), &app_state);

    // Anything outside /api is served from the public directory
    let router = router.fallback_service(ServeDir::new(&http.public_dir));

    let router = router
        .with_state(app_state)
        .layer(from_fn_with_state(
            HostGuard::new(http.expected_host.as_deref()),
            enforce_host,
        ));

    with_transport_layers(router, http)
}

fn with_transport_layers(router: Router<()>, http: &HttpConfig) -> Router<()> {
    let router = router
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            http.request_timeout,
        ))
        .layer(CatchPanicLayer::new());

    with_security_headers(router).layer(TraceLayer::new_for_http())
}
