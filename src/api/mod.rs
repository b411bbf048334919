pub mod handlers;
pub mod middleware;
pub mod models;
pub mod openapi;

use axum::{
    Router,
    body::Body,
    http::{HeaderName, HeaderValue, Method, Request, StatusCode, header},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::auth::gate::AuthGate;
use crate::core::services::HelloWorldService;
use crate::infrastructure::storage::{UserRepository, in_memory::InMemoryUserRepository};
use middleware::UuidRequestId;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Shared, cheaply cloned handler state.
///
/// `users` is wired in for completeness; no route reads or writes it.
#[derive(Clone)]
pub struct AppState {
    pub hello_world: HelloWorldService,
    pub users: Arc<dyn UserRepository>,
    pub auth: Arc<AuthGate>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserRepository>, auth: AuthGate) -> Self {
        AppState {
            hello_world: HelloWorldService::new(),
            users,
            auth: Arc::new(auth),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new(Arc::new(InMemoryUserRepository::new()), AuthGate::default())
    }
}

/// Routes plus the HTTP middleware stack.
pub fn app(state: AppState, request_timeout: Duration) -> Router {
    with_middleware(handlers::api_routes(state), request_timeout)
}

/// Wraps `router` in the response headers, compression, timeout, CORS,
/// tracing and request-id layers.
pub fn with_middleware(router: Router, request_timeout: Duration) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    router
        // Default hardening headers; X-Frame-Options is left out so the docs can be framed
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("0"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache, no-store, max-age=0, must-revalidate"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::EXPIRES,
            HeaderValue::from_static("0"),
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, request_timeout))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST])
                .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]),
        )
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
            let rid = req
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("n/a");
            tracing::info_span!(
                "http_request",
                method = %req.method(),
                uri = %req.uri(),
                request_id = %rid,
            )
        }))
        .layer(SetRequestIdLayer::new(request_id, UuidRequestId))
}
