//! HTTP-level tests for the access gateway.
//!
//! These drive a real axum router through `tower::ServiceExt::oneshot` with
//! tokens minted by `jsonwebtoken`, so the cookie parsing, signature checks,
//! redirects and JSON rejections are all exercised end to end.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{
        header::{COOKIE, LOCATION, SET_COOKIE},
        Request, StatusCode,
    },
    response::Response,
    routing::get,
    Router,
};
use credentials::JwtVerifier;
use http_body_util::BodyExt;
use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
use roomgate::auth::{protect, session_router, AccessGateway};
use serde_json::json;
use tower::ServiceExt;

// ── Test JWT helpers ───────────────────────────────────────────

const TEST_SECRET: &[u8] = b"test-secret-for-gateway-tests";

fn sign_with(secret: &[u8], role: &str, exp: u64) -> String {
    let claims = json!({ "sub": "42", "role": role, "exp": exp });
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .expect("failed to encode test JWT")
}

fn valid_token(role: &str) -> String {
    sign_with(TEST_SECRET, role, get_current_timestamp() + 3600)
}

fn expired_token(role: &str) -> String {
    sign_with(TEST_SECRET, role, get_current_timestamp() - 3600)
}

fn forged_token(role: &str) -> String {
    sign_with(b"not-the-gateway-secret", role, get_current_timestamp() + 3600)
}

// ── Test app builder ───────────────────────────────────────────

/// Every path answers 200 "reached" so a forward is easy to spot.
fn build_test_app() -> Router {
    let gateway = Arc::new(AccessGateway::new(Arc::new(JwtVerifier::from_secret(
        TEST_SECRET,
    ))));
    let routes = Router::new()
        .merge(session_router())
        .route("/", get(|| async { "home" }))
        .fallback(|| async { "reached" });
    protect(routes, gateway)
}

async fn send(path: &str, token: Option<&str>) -> Response {
    let mut request = Request::builder().uri(path);
    if let Some(token) = token {
        request = request.header(COOKIE, format!("theme=dark; auth_token={token}"));
    }
    build_test_app()
        .oneshot(request.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8_lossy(&bytes).to_string()
}

fn assert_redirect(resp: &Response, target: &str) {
    assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(resp.headers()[LOCATION], target);
}

// ── Tests ───────────────────────────────────────────────────────

#[tokio::test]
async fn missing_cookie_on_page_redirects_home() {
    for path in ["/admin/reports", "/tenants/profile", "/landlords", "/role"] {
        let resp = send(path, None).await;
        assert_redirect(&resp, "/");
        assert!(resp.headers().get(SET_COOKIE).is_none());
    }
}

#[tokio::test]
async fn missing_cookie_on_api_is_401_json() {
    let resp = send("/api/user/1", None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        json!({ "success": false, "message": "missing token" })
    );
}

#[tokio::test]
async fn admin_in_tenant_areas_redirects_to_reports() {
    let token = valid_token("admin");
    for path in ["/tenants/profile", "/landlords/listings", "/role"] {
        let resp = send(path, Some(&token)).await;
        assert_redirect(&resp, "/admin/reports");
    }
}

#[tokio::test]
async fn user_in_admin_area_redirects_to_role() {
    let token = valid_token("user");
    for path in ["/admin", "/admin/reports"] {
        let resp = send(path, Some(&token)).await;
        assert_redirect(&resp, "/role");
    }
}

#[tokio::test]
async fn admin_reaches_reports() {
    let resp = send("/admin/reports", Some(&valid_token("admin"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "reached");
}

#[tokio::test]
async fn user_reaches_tenant_profile() {
    let resp = send("/tenants/profile", Some(&valid_token("user"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "reached");
}

#[tokio::test]
async fn forged_token_redirects_home_and_clears_cookie() {
    for path in ["/admin/reports", "/tenants/profile", "/api/user/1"] {
        let resp = send(path, Some(&forged_token("admin"))).await;
        assert_redirect(&resp, "/");
        assert_eq!(
            resp.headers()[SET_COOKIE],
            "auth_token=; Path=/; Max-Age=0"
        );
    }
}

#[tokio::test]
async fn expired_token_on_api_is_401_without_clearing() {
    let resp = send("/api/user/1", Some(&expired_token("user"))).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().get(SET_COOKIE).is_none());
    assert_eq!(
        body_json(resp).await,
        json!({ "success": false, "message": "invalid or expired token" })
    );
}

#[tokio::test]
async fn expired_token_on_page_redirects_without_clearing() {
    let resp = send("/tenants/profile", Some(&expired_token("user"))).await;
    assert_redirect(&resp, "/");
    assert!(resp.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn malformed_token_on_api_is_401() {
    let resp = send("/api/groups", Some("definitely.not.ajwt")).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(resp).await["message"], "invalid or expired token");
}

#[tokio::test]
async fn unprotected_paths_skip_the_gateway() {
    let resp = send("/", None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_text(resp).await, "home");

    let resp = send("/properties/9", Some(&forged_token("user"))).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn query_string_does_not_affect_matching() {
    let resp = send("/admin?tab=open", Some(&valid_token("user"))).await;
    assert_redirect(&resp, "/role");
}

#[tokio::test]
async fn same_request_same_outcome() {
    let token = valid_token("user");
    let first = send("/admin/reports", Some(&token)).await;
    let second = send("/admin/reports", Some(&token)).await;
    assert_eq!(first.status(), second.status());
    assert_eq!(first.headers()[LOCATION], second.headers()[LOCATION]);
}

// Unknown roles are held to "user" rules rather than slipping into /admin.
#[tokio::test]
async fn unknown_role_cannot_reach_admin() {
    let resp = send("/admin/reports", Some(&valid_token("moderator"))).await;
    assert_redirect(&resp, "/role");
}

#[tokio::test]
async fn logout_clears_cookie() {
    let resp = send("/logout", Some(&valid_token("user"))).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()[LOCATION], "/");
    assert_eq!(
        resp.headers()[SET_COOKIE],
        "auth_token=; Path=/; Max-Age=0"
    );
}
