//! User repository for all SQLite operations related to users.
//!
//! This repository encapsulates all database access logic for the `users`
//! table, providing a clean interface for the service layer. Every method is
//! a direct passthrough to the store; no caching, retry, or batching.

use log::{debug, info};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::User;

/// Repository for user-related database operations.
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new UserRepository instance.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `users` table if it does not exist.
    ///
    /// This method should be called once during application startup. The
    /// unique constraint on `username` is the store-level guard that keeps
    /// concurrent creates from violating username uniqueness; the service's
    /// lookup before insert is only a fast-path pre-check.
    pub async fn ensure_schema(&self) -> Result<(), ApiError> {
        info!("Ensuring users table exists...");

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                username TEXT NOT NULL UNIQUE,
                password TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Find a user by their numeric identifier.
    pub async fn find_by_id(&self, id: i64) -> Result<Option<User>, ApiError> {
        debug!("Finding user by id: {}", id);

        let user =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(user)
    }

    /// Find a user by their username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApiError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Fetch all users, ordered by id.
    pub async fn find_all(&self) -> Result<Vec<User>, ApiError> {
        let users =
            sqlx::query_as::<_, User>("SELECT id, username, password FROM users ORDER BY id")
                .fetch_all(&self.pool)
                .await?;

        Ok(users)
    }

    /// Save a user: insert when the entity has no id, otherwise update the
    /// row in place. Returns the persisted entity with its id populated.
    pub async fn save(&self, user: &User) -> Result<User, ApiError> {
        match user.id {
            Some(id) => {
                sqlx::query("UPDATE users SET username = ?, password = ? WHERE id = ?")
                    .bind(&user.username)
                    .bind(&user.password)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;

                Ok(user.clone())
            }
            None => {
                let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
                    .bind(&user.username)
                    .bind(&user.password)
                    .execute(&self.pool)
                    .await?;

                Ok(User {
                    id: Some(result.last_insert_rowid()),
                    ..user.clone()
                })
            }
        }
    }

    /// Delete a user by id. Returns the number of rows removed.
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, ApiError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::sqlite::SqlitePoolOptions;

    use super::*;

    async fn test_repository() -> UserRepository {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");

        let repository = UserRepository::new(pool);
        repository.ensure_schema().await.unwrap();
        repository
    }

    fn new_user(username: &str) -> User {
        User {
            id: None,
            username: username.to_string(),
            password: "{noop}1234".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_save_assigns_id_on_insert() {
        let repository = test_repository().await;

        let saved = repository.save(&new_user("user1")).await.unwrap();
        assert_eq!(saved.id, Some(1));

        let found = repository.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.username, "user1");
        assert_eq!(found.password, "{noop}1234");
    }

    #[actix_web::test]
    async fn test_save_updates_existing_row_in_place() {
        let repository = test_repository().await;

        let saved = repository.save(&new_user("user1")).await.unwrap();
        let updated = repository
            .save(&User {
                id: saved.id,
                username: "user99".to_string(),
                password: "{noop}13579".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(updated.id, saved.id);

        let found = repository.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.username, "user99");
        assert_eq!(found.password, "{noop}13579");
    }

    #[actix_web::test]
    async fn test_unique_index_rejects_duplicate_username() {
        let repository = test_repository().await;

        repository.save(&new_user("user1")).await.unwrap();
        let error = repository.save(&new_user("user1")).await.unwrap_err();

        assert!(matches!(error, ApiError::Conflict(_)));
    }

    #[actix_web::test]
    async fn test_find_all_returns_users_ordered_by_id() {
        let repository = test_repository().await;

        repository.save(&new_user("user1")).await.unwrap();
        repository.save(&new_user("user2")).await.unwrap();
        repository.save(&new_user("user3")).await.unwrap();

        let users = repository.find_all().await.unwrap();
        let usernames: Vec<&str> = users.iter().map(|u| u.username.as_str()).collect();
        assert_eq!(usernames, vec!["user1", "user2", "user3"]);
    }

    #[actix_web::test]
    async fn test_delete_by_id_reports_rows_affected() {
        let repository = test_repository().await;

        repository.save(&new_user("user1")).await.unwrap();

        assert_eq!(repository.delete_by_id(1).await.unwrap(), 1);
        assert_eq!(repository.delete_by_id(1).await.unwrap(), 0);
        assert!(repository.find_by_id(1).await.unwrap().is_none());
    }
}
