use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

/// A single constraint violation on an entity field.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        FieldError {
            field: field.into(),
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// Credentials missing or rejected on a protected path
    #[error("Full authentication is required to access this resource")]
    AuthenticationFailure,

    /// Entity failed one or more field constraints
    #[error("Validation failed for {} field(s)", .0.len())]
    ValidationFailed(Vec<FieldError>),

    /// Request body could not be read into the expected shape
    #[error("Malformed request body: {0}")]
    Deserialization(String),

    /// Path segment or query string could not be decoded
    #[error("Invalid request parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// User with given ID not found
    #[error("User {0} not found")]
    UserNotFound(i64),

    /// No route matched the request path
    #[error("No resource found at {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}
