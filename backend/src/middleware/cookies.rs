//! Reading and expiring the session cookie.

use axum::http::{header::SET_COOKIE, HeaderMap, HeaderValue};
use axum_extra::extract::CookieJar;

pub const AUTH_COOKIE: &str = "auth_token";

/// `Set-Cookie` value that makes the browser drop `auth_token`.
pub const CLEAR_AUTH_COOKIE: &str = "auth_token=; Path=/; Max-Age=0";

/// Value of `auth_token` across all `Cookie` headers, if present.
pub fn read_auth_cookie(headers: &HeaderMap) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(AUTH_COOKIE)
        .map(|cookie| cookie.value().to_owned())
}

pub fn append_clear_auth_cookie(headers: &mut HeaderMap) {
    headers.append(SET_COOKIE, HeaderValue::from_static(CLEAR_AUTH_COOKIE));
}
