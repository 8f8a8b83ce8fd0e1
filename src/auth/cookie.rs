/**
 * Session Cookie Carrier
 *
 * The session token travels between server and client in a single HTTP-only
 * cookie. Login adds it, logout replaces it with a removal cookie whose
 * expiration is already in the past; the authentication gate reads it back.
 * One name is used on both sides.
 */

use axum_extra::extract::cookie::Cookie;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Build the cookie set on successful login
///
/// `HttpOnly` keeps the token out of reach of page scripts. No `Max-Age` is
/// set; the token carries its own expiration.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

/// Build the cookie used to clear the session
///
/// Passing this to `CookieJar::remove` produces a Set-Cookie with an empty
/// value and an already-past expiration, which is how the browser is told to
/// drop the session.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_extra::extract::cookie::CookieJar;

    #[test]
    fn test_session_cookie_is_http_only() {
        let cookie = session_cookie("abc".to_string());
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "abc");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_removal_clears_session() {
        let jar = CookieJar::new().add(session_cookie("abc".to_string()));
        let jar = jar.remove(removal_cookie());
        assert!(jar.get(SESSION_COOKIE).is_none());
    }
}
