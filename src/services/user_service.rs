//! User service for user CRUD operations.

use std::sync::Arc;

use log::{debug, info, warn};
use sqlx::SqlitePool;

use crate::constants::{ERR_USER_EXISTS, ERR_USER_NOT_FOUND};
use crate::errors::ApiError;
use crate::models::{User, UserRequest, UserResponse};
use crate::repositories::UserRepository;
use crate::utils::log_sanitizer::mask_username;

/// Literal prefix stored in front of every password, marking it as
/// plaintext-equivalent. No hashing is performed.
const PLAINTEXT_PASSWORD_PREFIX: &str = "{noop}";

pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: Arc::new(UserRepository::new(pool)),
        }
    }

    /// Get the underlying repository (for schema setup and sharing).
    pub fn repository(&self) -> Arc<UserRepository> {
        Arc::clone(&self.repository)
    }

    /// Create a new user with a store-generated id.
    ///
    /// The username lookup here is a fast-path pre-check; two concurrent adds
    /// with the same username race past it, and the loser is rejected by the
    /// store's unique constraint instead.
    pub async fn add(&self, req: UserRequest) -> Result<User, ApiError> {
        if self
            .repository
            .find_by_username(&req.username)
            .await?
            .is_some()
        {
            warn!(
                "Create failed: username {} already taken",
                mask_username(&req.username)
            );
            return Err(ApiError::Conflict(ERR_USER_EXISTS.to_string()));
        }

        let user = User {
            id: None,
            username: req.username,
            password: format!("{}{}", PLAINTEXT_PASSWORD_PREFIX, req.password),
        };

        let user = self.repository.save(&user).await?;
        info!(
            "Created user {} with id: {}",
            mask_username(&user.username),
            user.id.unwrap_or_default()
        );

        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Fetching user by id: {}", id);
        self.repository.find_by_id(id).await
    }

    /// Fetch all users as response shapes, ordered by id.
    pub async fn get_all_users(&self) -> Result<Vec<UserResponse>, ApiError> {
        let users = self.repository.find_all().await?;
        Ok(users.into_iter().map(|u| u.into()).collect())
    }

    /// Overwrite username and password of an existing user.
    pub async fn update_user(&self, id: i64, req: UserRequest) -> Result<User, ApiError> {
        let existing_user = self.repository.find_by_id(id).await?.ok_or_else(|| {
            warn!("Update failed: user not found with id: {}", id);
            ApiError::NotFound(ERR_USER_NOT_FOUND.to_string())
        })?;

        // Username uniqueness must also hold across updates
        if req.username != existing_user.username {
            if let Some(other_user) = self.repository.find_by_username(&req.username).await? {
                if other_user.id != existing_user.id {
                    warn!(
                        "Update failed: username {} already taken",
                        mask_username(&req.username)
                    );
                    return Err(ApiError::Conflict(ERR_USER_EXISTS.to_string()));
                }
            }
        }

        let user = User {
            id: existing_user.id,
            username: req.username,
            password: format!("{}{}", PLAINTEXT_PASSWORD_PREFIX, req.password),
        };

        let user = self.repository.save(&user).await?;
        info!("Successfully updated user: {}", id);

        Ok(user)
    }

    /// Delete a user by id.
    pub async fn delete_user(&self, id: i64) -> Result<(), ApiError> {
        let deleted = self.repository.delete_by_id(id).await?;

        if deleted == 0 {
            warn!("Delete failed: user not found with id: {}", id);
            return Err(ApiError::NotFound(ERR_USER_NOT_FOUND.to_string()));
        }

        info!("Successfully deleted user: {}", id);
        Ok(())
    }
}
