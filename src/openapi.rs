use utoipa::OpenApi;

use crate::models::{ErrorResponse, HealthResponse, UserRequest, UserResponse};

/// OpenAPI documentation for the User Management API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Management API",
        version = "1.0.0",
        description = "A minimal REST API for managing user records: create, read, update, delete, and list users."
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Users", description = "User management endpoints (CRUD operations)")
    ),
    paths(
        crate::handlers::add_user,
        crate::handlers::get_user,
        crate::handlers::get_users,
        crate::handlers::update_user,
        crate::handlers::delete_user,
        crate::routes::health_check
    ),
    components(
        schemas(
            UserRequest,
            UserResponse,
            ErrorResponse,
            HealthResponse
        )
    )
)]
pub struct ApiDoc;
