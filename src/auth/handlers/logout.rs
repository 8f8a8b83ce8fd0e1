/**
 * Logout Handler
 *
 * This module implements the handler for GET /user/logout. Logout is
 * unconditional and idempotent: it clears the session cookie whether or not
 * one was present and redirects to the landing page. The token itself is not
 * revoked server-side (stateless sessions); it simply ages out.
 */

use axum::response::Redirect;
use axum_extra::extract::CookieJar;

use crate::auth::cookie::removal_cookie;
use crate::routes::HOME_PATH;

/// Logout handler
///
/// Replaces the session cookie with a removal cookie (empty value, past
/// expiration) and redirects to the unauthenticated landing page. Safe to
/// call with or without an existing session.
pub async fn logout(jar: CookieJar) -> (CookieJar, Redirect) {
    tracing::info!("Logout; clearing session cookie");
    (jar.remove(removal_cookie()), Redirect::to(HOME_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::cookie::{session_cookie, SESSION_COOKIE};

    #[tokio::test]
    async fn test_logout_clears_cookie() {
        let jar = CookieJar::new().add(session_cookie("sometoken".to_string()));

        let (jar, _redirect) = logout(jar).await;
        assert!(jar.get(SESSION_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_logout_without_session_is_fine() {
        let (jar, _redirect) = logout(CookieJar::new()).await;
        assert!(jar.get(SESSION_COOKIE).is_none());
    }
}
