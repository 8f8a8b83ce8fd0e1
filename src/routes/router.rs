/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines all
 * route configurations into a single Axum router.
 *
 * # Route Order
 *
 * 1. Public account routes (signup, login, logout)
 * 2. Gate-protected routes (upload, current user)
 * 3. Static serving of the uploads directory
 * 4. Fallback handler (404)
 */

use axum::{http::StatusCode, Router};
use tower::ServiceBuilder;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::routes::api_routes::configure_account_routes;
use crate::routes::upload_routes::configure_protected_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state (codec, pool, uploads directory)
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new();

    let router = configure_account_routes(router);
    let router = configure_protected_routes(router, app_state.clone());

    // Stored uploads are served back under /uploads.
    let router = router.nest_service(
        "/uploads",
        ServeDir::new(app_state.uploads_dir.as_ref().clone()),
    );

    let router = router.fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    router
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(app_state)
}
