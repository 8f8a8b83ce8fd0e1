/**
 * Public Account Routes
 *
 * This module wires the account endpoints that must be reachable without a
 * session: signup, login, and logout. Logout is public on purpose - clearing
 * a cookie that is absent or dead must still succeed.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::{login, logout, signup};
use crate::server::state::AppState;

/// Configure the public account routes
///
/// # Routes
///
/// - `POST /user/signup` - Account registration
/// - `POST /user/login` - Credential check, session cookie, redirect
/// - `GET /user/logout` - Clear session cookie, redirect
pub fn configure_account_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/user/signup", post(signup))
        .route("/user/login", post(login))
        .route("/user/logout", get(logout))
}
