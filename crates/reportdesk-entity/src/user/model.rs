//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use reportdesk_core::{AppError, AppResult};

use super::role::UserRole;
use crate::validation;

/// A registered user: either an admin or a resident.
///
/// Passwords are stored and compared in plaintext, a known weakness kept
/// for compatibility with existing account data. The field is excluded
/// from outward serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    #[sqlx(rename = "user_id")]
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Plaintext password (documented weakness, see above).
    #[serde(skip_serializing)]
    pub password: String,
    /// Full legal name.
    pub full_name: String,
    /// Home address.
    pub address: String,
    /// Gender selection (optional).
    pub gender: Option<String>,
    /// Unique email address.
    pub email: String,
    /// Contact phone number (optional).
    pub contact_number: Option<String>,
    /// Birthday as a free-text `YYYY-MM-DD` string (optional).
    pub birthday: Option<String>,
    /// Role within the workflow.
    #[sqlx(rename = "user_role")]
    pub role: UserRole,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check if this user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Validate the user's required fields and formats.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(
            &self.username,
            &self.password,
            &self.full_name,
            &self.email,
            self.gender.as_deref(),
            self.contact_number.as_deref(),
            self.birthday.as_deref(),
        )
    }
}

/// Data required to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
    /// Full legal name.
    pub full_name: String,
    /// Home address.
    pub address: String,
    /// Gender selection (optional).
    pub gender: Option<String>,
    /// Email address.
    pub email: String,
    /// Contact phone number (optional).
    pub contact_number: Option<String>,
    /// Birthday as `YYYY-MM-DD` (optional).
    pub birthday: Option<String>,
    /// Assigned role.
    pub role: UserRole,
}

impl CreateUser {
    /// Validate the registration data.
    pub fn validate(&self) -> AppResult<()> {
        validate_fields(
            &self.username,
            &self.password,
            &self.full_name,
            &self.email,
            self.gender.as_deref(),
            self.contact_number.as_deref(),
            self.birthday.as_deref(),
        )
    }
}

fn validate_fields(
    username: &str,
    password: &str,
    full_name: &str,
    email: &str,
    gender: Option<&str>,
    contact_number: Option<&str>,
    birthday: Option<&str>,
) -> AppResult<()> {
    if !validation::is_valid_username(username) {
        return Err(AppError::validation(
            "Username must be 3-20 characters of letters, numbers, and underscores",
        ));
    }
    if !validation::is_valid_password(password) {
        return Err(AppError::validation(
            "Password must be at least 6 characters",
        ));
    }
    if !validation::is_not_empty(full_name) {
        return Err(AppError::validation("Full name is required"));
    }
    if !validation::is_valid_email(email) {
        return Err(AppError::validation("Invalid email address"));
    }
    if let Some(gender) = gender {
        if !validation::is_valid_gender(gender) {
            return Err(AppError::validation("Invalid gender selection"));
        }
    }
    if let Some(phone) = contact_number {
        if !validation::is_valid_phone(phone) {
            return Err(AppError::validation("Invalid contact number"));
        }
    }
    if let Some(date) = birthday {
        if !validation::is_valid_date(date) {
            return Err(AppError::validation("Birthday must be YYYY-MM-DD"));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CreateUser {
        CreateUser {
            username: "juan_cruz".to_string(),
            password: "secret1".to_string(),
            full_name: "Juan Dela Cruz".to_string(),
            address: "123 Main St.".to_string(),
            gender: Some("Male".to_string()),
            email: "juan@example.com".to_string(),
            contact_number: Some("09123456789".to_string()),
            birthday: Some("1995-04-02".to_string()),
            role: UserRole::Resident,
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let mut user = sample();
        user.gender = None;
        user.contact_number = None;
        user.birthday = None;
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_rejects_short_password() {
        let mut user = sample();
        user.password = "12345".to_string();
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_email() {
        let mut user = sample();
        user.email = "juan@example".to_string();
        assert!(user.validate().is_err());
    }

    #[test]
    fn test_rejects_present_but_invalid_optionals() {
        let mut user = sample();
        user.birthday = Some("02/04/1995".to_string());
        assert!(user.validate().is_err());
    }
}
