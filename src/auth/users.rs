/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations. Password comparison
 * is a capability of the `User` record itself; callers never touch the
 * stored hash directly.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID, stored as text)
    pub id: String,
    /// User email address
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
    /// Updated at timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Compare a candidate password against the stored hash
    ///
    /// bcrypt does the comparison in constant time. An error here means the
    /// stored hash is unreadable, not that the password was wrong.
    pub fn verify_password(&self, candidate: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::verify(candidate, &self.password_hash)
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    pool: &SqlitePool,
    email: String,
    password_hash: String,
) -> Result<User, sqlx::Error> {
    let id = uuid::Uuid::new_v4().to_string();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at, updated_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, email, password_hash, created_at, updated_at
        "#,
    )
    .bind(&id)
    .bind(&email)
    .bind(&password_hash)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE email = ?1
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `id` - User ID (UUID string)
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_id(pool: &SqlitePool, id: &str) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at, updated_at
        FROM users
        WHERE id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::MIGRATOR;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> SqlitePool {
        // One connection so the in-memory database is shared across queries.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        MIGRATOR.run(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_create_and_lookup_user() {
        let pool = test_pool().await;

        let hash = bcrypt::hash("password123", 4).unwrap();
        let user = create_user(&pool, "test@example.com".to_string(), hash)
            .await
            .unwrap();
        assert_eq!(user.email, "test@example.com");

        let by_email = get_user_by_email(&pool, "test@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_email.id, user.id);

        let by_id = get_user_by_id(&pool, &user.id).await.unwrap().unwrap();
        assert_eq!(by_id.email, user.email);
    }

    #[tokio::test]
    async fn test_lookup_missing_user() {
        let pool = test_pool().await;
        let user = get_user_by_email(&pool, "nobody@example.com").await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let pool = test_pool().await;

        let hash = bcrypt::hash("password123", 4).unwrap();
        create_user(&pool, "test@example.com".to_string(), hash.clone())
            .await
            .unwrap();

        let result = create_user(&pool, "test@example.com".to_string(), hash).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_verify_password() {
        let pool = test_pool().await;

        let hash = bcrypt::hash("password123", 4).unwrap();
        let user = create_user(&pool, "test@example.com".to_string(), hash)
            .await
            .unwrap();

        assert!(user.verify_password("password123").unwrap());
        assert!(!user.verify_password("wrongpassword").unwrap());
    }
}
