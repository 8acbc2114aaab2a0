//! User-related response models.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::User;

/// User data returned in API responses (without the password)
#[derive(Debug, Serialize, Deserialize, Clone, ToSchema)]
pub struct UserResponse {
    /// User's unique identifier
    #[schema(example = 2)]
    pub id: i64,
    /// User's username
    #[schema(example = "user2")]
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        // Only persisted users cross the HTTP boundary; an entity without a
        // store-assigned id here is a caller bug, not a valid response.
        debug_assert!(user.id.is_some(), "unsaved user mapped to response");
        Self {
            id: user.id.unwrap_or_default(),
            username: user.username,
        }
    }
}
