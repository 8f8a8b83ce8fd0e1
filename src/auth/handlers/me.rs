/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /user/me, which returns
 * information about the currently authenticated user. The route sits behind
 * the authentication gate; the handler receives the verified identity
 * through the `AuthUser` extractor rather than re-checking the token.
 */

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Get current user handler
///
/// # Errors
///
/// * `404 Not Found` - the account behind the token no longer exists
/// * `500 Internal Server Error` - database failure or unconfigured database
pub async fn get_me(
    State(pool): State<Option<SqlitePool>>,
    AuthUser(identity): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let pool = pool.ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::ServiceUnavailable
    })?;

    let user = get_user_by_id(&pool, &identity.user_id.to_string())
        .await
        .map_err(|e| {
            tracing::error!("Database error fetching current user: {:?}", e);
            ApiError::ServiceUnavailable
        })?
        .ok_or_else(|| {
            tracing::warn!("Authenticated user {} not found", identity.user_id);
            ApiError::AccountNotFound
        })?;

    Ok(Json(UserResponse {
        id: user.id,
        email: user.email,
    }))
}
