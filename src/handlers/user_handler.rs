//! User management handlers for CRUD operations.

use actix_web::{web, HttpResponse};
use log::{debug, warn};
use validator::Validate;

use crate::constants::{ERR_USER_NOT_FOUND, MSG_USER_DELETED};
use crate::errors::ApiError;
use crate::models::{UserRequest, UserResponse};
use crate::services::UserService;
use crate::validators::validation_errors_to_api_error;

/// Create a new user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 409, description = "User already exists", body = crate::models::ErrorResponse)
    )
)]
pub async fn add_user(
    user_service: web::Data<UserService>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    body.validate().map_err(validation_errors_to_api_error)?;

    let user = user_service.add(body.into_inner()).await?;
    let user_response: UserResponse = user.into();

    Ok(HttpResponse::Created().json(user_response))
}

/// Get a specific user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn get_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();
    debug!("Fetching user with id: {}", user_id);

    let user = user_service.get_user_by_id(user_id).await?.ok_or_else(|| {
        warn!("User not found with id: {}", user_id);
        ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
    })?;

    let user_response: UserResponse = user.into();
    Ok(HttpResponse::Ok().json(user_response))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 204, description = "No users exist")
    )
)]
pub async fn get_users(user_service: web::Data<UserService>) -> Result<HttpResponse, ApiError> {
    let users = user_service.get_all_users().await?;

    if users.is_empty() {
        debug!("No users found");
        return Ok(HttpResponse::NoContent().finish());
    }

    Ok(HttpResponse::Ok().json(users))
}

/// Update a user's username and password
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation error", body = crate::models::ErrorResponse),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse),
        (status = 409, description = "Username already taken", body = crate::models::ErrorResponse)
    )
)]
pub async fn update_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
    body: web::Json<UserRequest>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    body.validate().map_err(validation_errors_to_api_error)?;

    let updated_user = user_service.update_user(user_id, body.into_inner()).await?;
    let user_response: UserResponse = updated_user.into();

    Ok(HttpResponse::Ok().json(user_response))
}

/// Delete a user account
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = String),
        (status = 404, description = "User not found", body = crate::models::ErrorResponse)
    )
)]
pub async fn delete_user(
    user_service: web::Data<UserService>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    let user_id = path.into_inner();

    user_service.delete_user(user_id).await?;

    Ok(HttpResponse::Ok().body(MSG_USER_DELETED))
}
