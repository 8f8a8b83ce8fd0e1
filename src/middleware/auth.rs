/**
 * Authentication Gate
 *
 * Middleware protecting routes that require a logged-in user. It reads the
 * session cookie, verifies the token through the session codec, and attaches
 * the recovered identity to the request for handlers to pick up.
 *
 * Every failure mode - no cookie, malformed token, expired token - ends the
 * same way: a redirect to the login page. No error body ever leaves the
 * gate, and there is exactly one verification attempt per request; a caller
 * holding a dead token must log in again.
 */

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;

use crate::auth::cookie::SESSION_COOKIE;
use crate::auth::sessions::AuthenticatedUser;
use crate::routes::LOGIN_PATH;
use crate::server::state::AppState;

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the session token from the session cookie
/// 2. Verifies the token through the session codec
/// 3. Attaches the authenticated identity to the request extensions
///
/// Redirects to the login page if the cookie is missing or the token fails
/// verification for any reason.
pub async fn require_session(
    State(app_state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(cookie) = jar.get(SESSION_COOKIE) else {
        tracing::debug!("No session cookie; redirecting to login");
        return Redirect::to(LOGIN_PATH).into_response();
    };

    match app_state.sessions.verify(cookie.value()) {
        Ok(identity) => {
            request.extensions_mut().insert(identity);
            next.run(request).await
        }
        Err(e) => {
            tracing::warn!("Session token rejected ({}); redirecting to login", e);
            Redirect::to(LOGIN_PATH).into_response()
        }
    }
}

/// Axum extractor for the authenticated identity
///
/// Handlers behind the gate take this as a parameter to receive the identity
/// the gate attached, instead of digging through request extensions
/// themselves. Used on a route the gate does not cover, it rejects with the
/// same login redirect the gate would have issued.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                Redirect::to(LOGIN_PATH)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::sessions::SessionCodec;
    use axum::http::StatusCode;
    use axum::{middleware, routing::get, Router};
    use axum_extra::extract::cookie::Cookie;
    use axum_test::TestServer;
    use std::path::PathBuf;
    use std::sync::Arc;
    use uuid::Uuid;

    async fn guarded(AuthUser(user): AuthUser) -> String {
        user.user_id.to_string()
    }

    fn test_state() -> AppState {
        AppState {
            db_pool: None,
            sessions: Arc::new(SessionCodec::new("test-secret")),
            uploads_dir: Arc::new(PathBuf::from("/tmp")),
        }
    }

    fn test_app(state: AppState) -> Router {
        Router::new()
            .route("/guarded", get(guarded))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_session,
            ))
            .with_state(state)
    }

    #[tokio::test]
    async fn test_no_cookie_redirects_to_login() {
        let server = TestServer::new(test_app(test_state())).unwrap();

        let response = server.get("/guarded").await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_garbage_token_redirects_to_login() {
        let server = TestServer::new(test_app(test_state())).unwrap();

        let response = server
            .get("/guarded")
            .add_cookie(Cookie::new(SESSION_COOKIE, "not.a.token"))
            .await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
        assert_eq!(response.header("location"), LOGIN_PATH);
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler_with_identity() {
        let state = test_state();
        let user_id = Uuid::new_v4();
        let token = state.sessions.issue(user_id).unwrap();
        let server = TestServer::new(test_app(state)).unwrap();

        let response = server
            .get("/guarded")
            .add_cookie(Cookie::new(SESSION_COOKIE, token))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.text(), user_id.to_string());
    }

    #[tokio::test]
    async fn test_foreign_signature_redirects_to_login() {
        let state = test_state();
        let forged = SessionCodec::new("other-secret")
            .issue(Uuid::new_v4())
            .unwrap();
        let server = TestServer::new(test_app(state)).unwrap();

        let response = server
            .get("/guarded")
            .add_cookie(Cookie::new(SESSION_COOKIE, forged))
            .await;
        assert_eq!(response.status_code(), StatusCode::SEE_OTHER);
    }
}
