mod config_tests;
mod user_tests;

use crate::api::{AppState, app};
use crate::auth::basic::Credentials;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use std::time::Duration;
use tower::ServiceExt;

pub fn create_test_app() -> Router {
    app(AppState::default(), Duration::from_secs(30))
}

pub fn basic(username: &str, password: &str) -> String {
    Credentials::new(username, password).to_header_value()
}

pub fn admin() -> String {
    basic("admin", "password")
}

pub async fn send(router: Router, req: Request<Body>) -> (StatusCode, HeaderMap, String) {
    let response = router.oneshot(req).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, String::from_utf8(bytes.to_vec()).unwrap())
}
