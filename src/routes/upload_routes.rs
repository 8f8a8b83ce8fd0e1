/**
 * Gate-Protected Routes
 *
 * This module wires the endpoints that require a live session. The
 * authentication gate runs as route-level middleware, so unmatched paths
 * fall through to the fallback instead of being redirected.
 *
 * The upload route carries its own body limit: slightly above the
 * validator's 5 MiB cap, so that a conforming file plus multipart framing
 * fits while a grossly oversized body is cut off during streaming.
 */

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Router,
};

use crate::auth::get_me;
use crate::middleware::auth::require_session;
use crate::server::state::AppState;
use crate::upload::handlers::upload_profile_pic;
use crate::upload::validator::MAX_FILE_BYTES;

/// Headroom for multipart boundaries and part headers.
const BODY_LIMIT_SLACK: usize = 64 * 1024;

/// Configure the gate-protected routes
///
/// # Routes
///
/// - `PUT /user/profile-pic` - Profile picture upload
/// - `GET /user/me` - Current-user info
pub fn configure_protected_routes(
    router: Router<AppState>,
    app_state: AppState,
) -> Router<AppState> {
    let protected = Router::new()
        .route("/user/profile-pic", put(upload_profile_pic))
        .route("/user/me", get(get_me))
        .layer(DefaultBodyLimit::max(MAX_FILE_BYTES + BODY_LIMIT_SLACK))
        .route_layer(middleware::from_fn_with_state(app_state, require_session));

    router.merge(protected)
}
