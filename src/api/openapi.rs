use utoipa::{
    Modify, OpenApi,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};

use crate::{
    api::models::{ErrorResponse, HelloWorldRequest},
    core::{errors::FieldError, models::user::User},
};

#[derive(OpenApi)]
#[openapi(
    paths(super::handlers::hello_world, super::handlers::hello_world_post),
    components(schemas(HelloWorldRequest, ErrorResponse, FieldError, User)),
    modifiers(&BasicAuthScheme),
    info(
        title = "Hello World API",
        description = "Greeting endpoints behind HTTP Basic authentication",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct BasicAuthScheme;

impl Modify for BasicAuthScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme("basic_auth", SecurityScheme::Http(Http::new(HttpAuthScheme::Basic)));
        }
    }
}
