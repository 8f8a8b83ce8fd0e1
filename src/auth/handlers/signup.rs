/**
 * Signup Handler
 *
 * This module implements the account registration handler for
 * POST /user/signup.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Check whether the email is already registered
 * 3. Hash the password using bcrypt
 * 4. Create the user record
 * 5. Issue a session token, set the cookie, redirect to the dashboard
 *
 * # Validation
 *
 * - Email must contain '@' (basic check)
 * - Password must be at least 8 characters long
 * - Email must be unique
 */

use axum::{extract::State, response::Redirect, Form};
use axum_extra::extract::CookieJar;
use bcrypt::{hash, DEFAULT_COST};
use uuid::Uuid;

use crate::auth::cookie::session_cookie;
use crate::auth::handlers::types::SignupRequest;
use crate::auth::users::{create_user, get_user_by_email};
use crate::error::ApiError;
use crate::routes::DASHBOARD_PATH;
use crate::server::state::AppState;

/// Sign up handler
///
/// Validates the input, creates the account, and logs the new user straight
/// in: a fresh session token is issued and set on the cookie before the
/// redirect.
///
/// # Errors
///
/// * `400 Bad Request` - invalid email format or short password
/// * `409 Conflict` - email already registered
/// * `500 Internal Server Error` - hashing, creation, or token issuance
///   failure, including an unconfigured database
pub async fn signup(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(request): Form<SignupRequest>,
) -> Result<(CookieJar, Redirect), ApiError> {
    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable
    })?;
    tracing::info!("Signup request for: {}", request.email);

    if !request.email.contains('@') {
        tracing::warn!("Invalid email format: {}", request.email);
        return Err(ApiError::validation("Invalid email format"));
    }

    if request.password.len() < 8 {
        tracing::warn!("Password too short");
        return Err(ApiError::validation(
            "Password must be at least 8 characters",
        ));
    }

    match get_user_by_email(pool, &request.email).await {
        Ok(Some(_)) => {
            tracing::warn!("Email already exists: {}", request.email);
            return Err(ApiError::EmailTaken);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Database error during signup: {:?}", e);
            return Err(ApiError::ServiceUnavailable);
        }
    }

    let password_hash = hash(&request.password, DEFAULT_COST).map_err(|e| {
        tracing::error!("Failed to hash password: {:?}", e);
        ApiError::ServiceUnavailable
    })?;

    let user = create_user(pool, request.email.clone(), password_hash)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create user: {:?}", e);
            ApiError::ServiceUnavailable
        })?;

    let user_id = Uuid::parse_str(&user.id).map_err(|e| {
        tracing::error!("Stored user id is not a UUID: {:?}", e);
        ApiError::ServiceUnavailable
    })?;

    let token = state.sessions.issue(user_id).map_err(|e| {
        tracing::error!("Failed to issue session token: {:?}", e);
        ApiError::ServiceUnavailable
    })?;

    tracing::info!("User signed up successfully: {}", user.email);

    Ok((jar.add(session_cookie(token)), Redirect::to(DASHBOARD_PATH)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::cookie::SESSION_COOKIE;
    use crate::auth::sessions::SessionCodec;
    use crate::server::config::MIGRATOR;
    use sqlx::sqlite::SqlitePoolOptions;
    use sqlx::SqlitePool;
    use std::path::PathBuf;
    use std::sync::Arc;

    async fn test_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    fn test_state(pool: Option<SqlitePool>) -> AppState {
        AppState {
            db_pool: pool,
            sessions: Arc::new(SessionCodec::new("test-secret")),
            uploads_dir: Arc::new(PathBuf::from("/tmp")),
        }
    }

    fn request(email: &str, password: &str) -> Form<SignupRequest> {
        Form(SignupRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }

    #[tokio::test]
    async fn test_signup_success_sets_cookie() {
        let state = test_state(Some(test_pool().await));

        let result = signup(
            State(state.clone()),
            CookieJar::new(),
            request("new@example.com", "password123"),
        )
        .await;

        let (jar, _redirect) = result.unwrap();
        assert!(jar.get(SESSION_COOKIE).is_some());
    }

    #[tokio::test]
    async fn test_signup_rejects_short_password() {
        let state = test_state(Some(test_pool().await));

        let result = signup(
            State(state),
            CookieJar::new(),
            request("new@example.com", "short"),
        )
        .await;

        assert!(matches!(result, Err(ApiError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_signup_rejects_duplicate_email() {
        let state = test_state(Some(test_pool().await));

        signup(
            State(state.clone()),
            CookieJar::new(),
            request("new@example.com", "password123"),
        )
        .await
        .unwrap();

        let result = signup(
            State(state),
            CookieJar::new(),
            request("new@example.com", "password456"),
        )
        .await;

        assert!(matches!(result, Err(ApiError::EmailTaken)));
    }
}
