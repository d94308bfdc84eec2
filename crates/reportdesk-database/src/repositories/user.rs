//! User repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use reportdesk_core::error::{AppError, ErrorKind};
use reportdesk_core::result::AppResult;
use reportdesk_entity::user::{CreateUser, User, UserRole};

use crate::gateway::UserStore;
use crate::repositories::is_unique_violation;

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn create(&self, user: &CreateUser) -> AppResult<User> {
        user.validate()?;

        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, full_name, address, gender, email, \
             contact_number, birthday, user_role) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) RETURNING *",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.full_name)
        .bind(&user.address)
        .bind(&user.gender)
        .bind(&user.email)
        .bind(&user.contact_number)
        .bind(&user.birthday)
        .bind(user.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::duplicate_entry("Username or email already exists")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to create user", e)
            }
        })
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by username", e)
            })
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        // Plaintext comparison, carried over as a documented weakness.
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE username = $1 AND password = $2")
            .bind(username)
            .bind(password)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to authenticate", e))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    async fn find_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE user_role = $1 ORDER BY created_at DESC",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users by role", e))
    }

    async fn update(&self, user: &User) -> AppResult<User> {
        if user.id <= 0 {
            return Err(AppError::validation("User id must be positive"));
        }
        user.validate()?;

        let result = sqlx::query(
            "UPDATE users SET username = $1, password = $2, full_name = $3, address = $4, \
             gender = $5, email = $6, contact_number = $7, birthday = $8, user_role = $9, \
             updated_at = NOW() WHERE user_id = $10",
        )
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.full_name)
        .bind(&user.address)
        .bind(&user.gender)
        .bind(&user.email)
        .bind(&user.contact_number)
        .bind(&user.birthday)
        .bind(user.role)
        .bind(user.id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::duplicate_entry("Username or email already exists")
            } else {
                AppError::with_source(ErrorKind::Database, "Failed to update user", e)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("User not found"));
        }

        Ok(user.clone())
    }

    async fn update_password(&self, user_id: i64, new_password: &str) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE users SET password = $1, updated_at = NOW() WHERE user_id = $2")
                .bind(new_password)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to update password", e)
                })?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete user", e))?;
        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> AppResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count users", e))
    }
}
