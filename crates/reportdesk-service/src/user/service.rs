//! User registration, login, and profile management.

use std::sync::Arc;

use tracing::info;

use reportdesk_core::error::AppError;
use reportdesk_core::result::AppResult;
use reportdesk_database::gateway::UserStore;
use reportdesk_entity::user::{CreateUser, User, UserRole};
use reportdesk_entity::validation;

/// Handles user account operations.
#[derive(Clone)]
pub struct UserService {
    /// User gateway.
    users: Arc<dyn UserStore>,
}

impl UserService {
    /// Creates a new user service.
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    /// Registers a new user.
    ///
    /// Username and email are checked for duplicates up front; a race with
    /// a concurrent registration is still caught by the unique constraint
    /// at the gateway.
    pub async fn register(&self, registration: CreateUser) -> AppResult<User> {
        registration.validate()?;

        if self
            .users
            .find_by_username(&registration.username)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate_entry("Username already exists"));
        }
        if self.users.find_by_email(&registration.email).await?.is_some() {
            return Err(AppError::duplicate_entry("Email already exists"));
        }

        let user = self.users.create(&registration).await?;
        info!(user_id = user.id, username = %user.username, role = %user.role, "User registered");
        Ok(user)
    }

    /// Verifies a username/password pair.
    ///
    /// Plaintext comparison, a known weakness kept for compatibility with
    /// existing account data. Returns `None` on mismatch.
    pub async fn authenticate(&self, username: &str, password: &str) -> AppResult<Option<User>> {
        self.users.authenticate(username, password).await
    }

    /// Finds a user by id.
    pub async fn find(&self, user_id: i64) -> AppResult<Option<User>> {
        self.users.find_by_id(user_id).await
    }

    /// Finds a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.users.find_by_username(username).await
    }

    /// Lists every user, newest first.
    pub async fn list_all(&self) -> AppResult<Vec<User>> {
        self.users.find_all().await
    }

    /// Lists users with the given role, newest first.
    pub async fn list_by_role(&self, role: UserRole) -> AppResult<Vec<User>> {
        self.users.find_by_role(role).await
    }

    /// Updates a user's profile.
    pub async fn update_profile(&self, user: &User) -> AppResult<User> {
        let updated = self.users.update(user).await?;
        info!(user_id = user.id, "Profile updated");
        Ok(updated)
    }

    /// Resets a user's password.
    ///
    /// Only the minimum-length rule is enforced; there are no
    /// character-class requirements.
    pub async fn change_password(&self, user_id: i64, new_password: &str) -> AppResult<bool> {
        if !validation::is_valid_password(new_password) {
            return Err(AppError::validation(
                "Password must be at least 6 characters",
            ));
        }

        let changed = self.users.update_password(user_id, new_password).await?;
        if changed {
            info!(user_id, "Password changed");
        }
        Ok(changed)
    }

    /// Deletes a user account. Present for completeness; no interactive
    /// path exercises it.
    pub async fn delete(&self, user_id: i64) -> AppResult<bool> {
        self.users.delete(user_id).await
    }
}
