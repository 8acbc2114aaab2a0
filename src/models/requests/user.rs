//! User-related request models.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Request payload for creating or updating a user
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserRequest {
    /// Unique username
    #[validate(length(min = 1, message = "Username is required"))]
    #[schema(example = "user2")]
    pub username: String,
    /// Password (stored as-is, never returned in responses)
    #[validate(length(min = 1, message = "Password is required"))]
    #[schema(example = "securePassword123")]
    pub password: String,
}
