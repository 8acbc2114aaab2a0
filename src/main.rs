mod config;
mod constants;
mod errors;
mod handlers;
mod models;
mod openapi;
mod repositories;
mod routes;
mod services;
mod utils;
mod validators;

use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use sqlx::sqlite::SqlitePoolOptions;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CONFIG;
use crate::openapi::ApiDoc;
use crate::services::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize environment variables and logger
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    // Connect to SQLite
    info!("Connecting to database...");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&CONFIG.database_url)
        .await
        .expect("Failed to connect to database");

    // Initialize services and make sure the users table exists
    let user_service = UserService::new(pool);
    user_service
        .repository()
        .ensure_schema()
        .await
        .expect("Failed to create database schema");
    info!("Database schema is ready");

    let user_service = web::Data::new(user_service);

    // Start HTTP server
    let server_addr = format!("{}:{}", CONFIG.server_host, CONFIG.server_port);
    info!("Starting server at http://{}", server_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(user_service.clone())
            .configure(routes::configure_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_addr)?
    .run()
    .await
}
