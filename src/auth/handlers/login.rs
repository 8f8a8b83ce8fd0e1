/**
 * Login Handler
 *
 * This module implements the authentication handler for POST /user/login.
 *
 * # Authentication Process
 *
 * 1. Look up the account by email
 * 2. Verify the password through the account record (bcrypt)
 * 3. Issue a session token
 * 4. Set the session cookie and redirect to the dashboard
 *
 * # Security
 *
 * - Unknown email and wrong password produce the same failure, so callers
 *   cannot tell which one happened
 * - Collaborator failures (database, hashing, token issuance) collapse into
 *   a generic server error; detail goes to the logs only
 * - Passwords are never logged or returned in responses
 */

use axum::{extract::State, response::Redirect, Form};
use axum_extra::extract::CookieJar;
use uuid::Uuid;

use crate::auth::cookie::session_cookie;
use crate::auth::handlers::types::LoginRequest;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::routes::DASHBOARD_PATH;
use crate::server::state::AppState;

/// Login handler
///
/// Verifies the submitted credential pair and, on success, issues a fresh
/// session token, attaches it through the session cookie, and redirects to
/// the dashboard. Re-login supersedes any previously issued token on the
/// client; earlier tokens stay valid until they expire (stateless
/// verification, no revocation).
///
/// # Errors
///
/// * `400 Bad Request` - unknown account or wrong password (uniform)
/// * `500 Internal Server Error` - database, hashing, or token issuance
///   failure, including an unconfigured database
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<LoginRequest>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable
    })?;
    tracing::info!("Login request for: {}", request.email);

    let user = get_user_by_email(pool, &request.email)
        .await
        .map_err(|e| {
            tracing::error!("Database error during login: {:?}", e);
            ApiError::ServiceUnavailable
        })?
        .ok_or_else(|| {
            tracing::warn!("Login failed: unknown email {}", request.email);
            ApiError::InvalidCredentials
        })?;

    let valid = user.verify_password(&request.password).map_err(|e| {
        tracing::error!("Password verification error: {:?}", e);
        ApiError::ServiceUnavailable
    })?;

    if !valid {
        tracing::warn!("Login failed: wrong password for {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let user_id = Uuid::parse_str(&user.id).map_err(|e| {
        tracing::error!("Stored user id is not a UUID: {:?}", e);
        ApiError::ServiceUnavailable
    })?;

    let token = state.sessions.issue(user_id).map_err(|e| {
        tracing::error!("Failed to issue session token: {:?}", e);
        ApiError::ServiceUnavailable
    })?;

    tracing::info!("User logged in successfully: {}", user.email);

    Ok((jar.add(session_cookie(token)), Redirect::to(DASHBOARD_PATH)))
}
