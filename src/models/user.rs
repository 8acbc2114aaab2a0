use sqlx::FromRow;

/// User row stored in the `users` table.
///
/// `id` is `None` for an entity that has not been persisted yet; the store
/// assigns it on insert. The password field holds the raw credential with a
/// literal `{noop}` prefix and never crosses the HTTP boundary.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Option<i64>,
    pub username: String,
    pub password: String,
}
