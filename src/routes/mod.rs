use actix_web::web;

use crate::constants::MSG_SERVER_RUNNING;
use crate::handlers;
use crate::models::HealthResponse;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check)).service(
        web::scope("/users")
            // Create a new user
            .route("", web::post().to(handlers::add_user))
            // List all users
            .route("", web::get().to(handlers::get_users))
            // Get specific user by ID
            .route("/{id}", web::get().to(handlers::get_user))
            // Overwrite username and password
            .route("/{id}", web::put().to(handlers::update_user))
            // Delete user account
            .route("/{id}", web::delete().to(handlers::delete_user)),
    );
}

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Server is healthy", body = HealthResponse)
    )
)]
pub async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(HealthResponse {
        status: "OK".to_string(),
        message: MSG_SERVER_RUNNING.to_string(),
    })
}
