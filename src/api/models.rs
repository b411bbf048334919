use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request, rejection::JsonRejection},
    http::{HeaderValue, StatusCode, header, request::Parts},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::constants::AUTH_REALM;
use crate::core::errors::{AppError, FieldError};

/// Body accepted by `POST /hello-world/{id}`. Only `name` is required;
/// other user fields may be sent and are ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct HelloWorldRequest {
    pub name: String,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct HelloWorldQuery {
    /// Echoed back in the greeting, `nenhum` when absent or empty. Repeated
    /// values are joined with `,`.
    pub filter: Option<String>,
}

impl HelloWorldQuery {
    /// Collects every `filter` pair, in order. Empty values are skipped.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        let values: Vec<&str> = pairs
            .iter()
            .filter(|(key, value)| key == "filter" && !value.is_empty())
            .map(|(_, value)| value.as_str())
            .collect();

        HelloWorldQuery {
            filter: (!values.is_empty()).then(|| values.join(",")),
        }
    }
}

// Error document returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

// Newtype wrapper for AppError to implement IntoResponse
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            AppError::AuthenticationFailure => StatusCode::UNAUTHORIZED,
            AppError::ValidationFailed(_)
            | AppError::Deserialization(_)
            | AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AppError::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::UserNotFound(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalServerError(_) | AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self.0);
        }

        let message = self.0.to_string();
        let errors = match self.0 {
            AppError::ValidationFailed(violations) => violations,
            _ => Vec::new(),
        };
        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
            errors,
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            let challenge = format!("Basic realm=\"{}\"", AUTH_REALM);
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response.headers_mut().insert(header::WWW_AUTHENTICATE, value);
            }
        }
        response
    }
}

/// `Json` extractor whose rejections use the service's error document.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(JsonRejection::MissingJsonContentType(rejection)) => {
                Err(AppError::UnsupportedMediaType(rejection.body_text()).into())
            }
            Err(rejection) => Err(AppError::Deserialization(rejection.body_text()).into()),
        }
    }
}

/// `Path` extractor whose rejections use the service's error document.
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(ApiPath(value)),
            Err(rejection) => Err(AppError::InvalidParameter(rejection.body_text()).into()),
        }
    }
}

/// `Query` extractor whose rejections use the service's error document.
pub struct ApiQuery<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(ApiQuery(value)),
            Err(rejection) => Err(AppError::InvalidParameter(rejection.body_text()).into()),
        }
    }
}
