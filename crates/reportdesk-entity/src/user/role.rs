//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use reportdesk_core::AppError;

/// Roles available in the reporting workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Triages reports, publishes announcements.
    Admin,
    /// Submits reports, receives announcements.
    Resident,
}

impl UserRole {
    /// Return the canonical display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Resident => "Resident",
        }
    }

    /// Leniently parse a role from persisted text.
    ///
    /// Case-insensitive match against the display name; falls back to
    /// [`Self::Resident`] when nothing matches or the input is absent.
    /// This is the decode path for stored rows; operator input goes
    /// through the strict [`FromStr`] impl instead.
    pub fn parse(input: Option<&str>) -> Self {
        match input {
            Some(raw) if raw.trim().eq_ignore_ascii_case("admin") => Self::Admin,
            _ => Self::Resident,
        }
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl FromStr for UserRole {
    type Err = AppError;

    /// Strict parse for operator-supplied input. Unlike [`Self::parse`],
    /// unknown input is an error rather than a default, so a typo cannot
    /// silently become `Resident`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("admin") {
            Ok(Self::Admin)
        } else if trimmed.eq_ignore_ascii_case("resident") {
            Ok(Self::Resident)
        } else {
            Err(AppError::validation(format!("Unknown role '{s}'")))
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl sqlx::Type<sqlx::Postgres> for UserRole {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for UserRole {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(Some(raw)))
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for UserRole {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults_to_resident() {
        assert_eq!(UserRole::parse(None), UserRole::Resident);
        assert_eq!(UserRole::parse(Some("moderator")), UserRole::Resident);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(UserRole::parse(Some("ADMIN")), UserRole::Admin);
        assert_eq!(UserRole::parse(Some(" admin ")), UserRole::Admin);
        assert_eq!(UserRole::parse(Some("Resident")), UserRole::Resident);
    }

    #[test]
    fn test_strict_parse_rejects_unknown_input() {
        assert_eq!("Admin".parse::<UserRole>().unwrap(), UserRole::Admin);
        assert_eq!("resident".parse::<UserRole>().unwrap(), UserRole::Resident);

        // a typo is an error, never a default
        assert!("Amin".parse::<UserRole>().is_err());
        assert!("".parse::<UserRole>().is_err());
    }
}
