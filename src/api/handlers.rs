use crate::{
    api::{
        AppState,
        middleware::auth_middleware,
        models::*,
        openapi::ApiDoc,
    },
    auth::gate::Principal,
    constants::{DEFAULT_FILTER, DEFAULT_GREETING_NAME},
    core::errors::AppError,
};
use axum::{
    Router,
    Extension,
    extract::State,
    http::{Uri, header},
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Define API routes
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/hello-world", get(hello_world))
        .route("/hello-world/{id}", post(hello_world_post))
        .route("/openapi.yaml", get(openapi_yaml))
        .merge(SwaggerUi::new("/swagger-ui").url("/v3/api-docs", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.auth.clone(), auth_middleware))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/hello-world",
    responses(
        (status = 200, description = "Fixed greeting", body = String, content_type = "text/plain"),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn hello_world(State(state): State<AppState>) -> String {
    state.hello_world.hello_world(DEFAULT_GREETING_NAME)
}

#[utoipa::path(
    post,
    path = "/hello-world/{id}",
    request_body = HelloWorldRequest,
    params(
        ("id" = String, Path, description = "Identifier echoed back in the greeting"),
        HelloWorldQuery
    ),
    responses(
        (status = 200, description = "Greeting built from the posted user", body = String, content_type = "application/json"),
        (status = 400, description = "Malformed body, path or query", body = ErrorResponse),
        (status = 401, description = "Missing or invalid credentials", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse)
    ),
    security(("basic_auth" = []))
)]
pub async fn hello_world_post(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    ApiPath(id): ApiPath<String>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
    ApiJson(body): ApiJson<HelloWorldRequest>,
) -> impl IntoResponse {
    let query = HelloWorldQuery::from_pairs(&pairs);
    let filter = query.filter.as_deref().unwrap_or(DEFAULT_FILTER);
    info!(
        %id,
        filter,
        user = principal.username().unwrap_or("anonymous"),
        "Greeting posted user"
    );

    let greeting = state.hello_world.hello_world_for(&body.name, &id, filter);
    ([(header::CONTENT_TYPE, "application/json")], greeting)
}

pub async fn openapi_yaml() -> Result<impl IntoResponse, ApiError> {
    let yaml = ApiDoc::openapi()
        .to_yaml()
        .map_err(|e| AppError::InternalServerError(format!("OpenAPI rendering failed: {}", e)))?;
    Ok(([(header::CONTENT_TYPE, "application/yaml")], yaml))
}

async fn not_found(uri: Uri) -> ApiError {
    AppError::NotFound(uri.path().to_string()).into()
}
