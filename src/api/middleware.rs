use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use tower_http::request_id::{MakeRequestId, RequestId};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::api::models::ApiError;
use crate::auth::basic::parse_authorization;
use crate::auth::gate::{AuthDecision, AuthGate};
use crate::core::errors::AppError;

/// Runs the auth gate in front of every route, including the fallback.
/// A denied request never reaches its handler, so its body is left unread.
pub async fn auth_middleware(
    State(gate): State<Arc<AuthGate>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let authorization = parse_authorization(
        req.headers()
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok()),
    );

    match gate.evaluate(req.uri().path(), authorization.credentials()) {
        AuthDecision::Allow(principal) => {
            debug!(?principal, path = %req.uri().path(), "Request authorized");
            req.extensions_mut().insert(principal);
            Ok(next.run(req).await)
        }
        AuthDecision::Deny => {
            warn!(method = %req.method(), path = %req.uri().path(), "Authentication required");
            Err(AppError::AuthenticationFailure.into())
        }
    }
}

/// `x-request-id` values for requests that arrive without one.
#[derive(Clone, Default)]
pub struct UuidRequestId;

impl MakeRequestId for UuidRequestId {
    fn make_request_id<B>(&mut self, _req: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        Some(RequestId::new(id.parse().ok()?))
    }
}
