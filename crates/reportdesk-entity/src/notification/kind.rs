//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// A report was submitted or its status changed.
    Report,
    /// An announcement was published.
    Announcement,
    /// A system-wide broadcast.
    System,
}

impl NotificationKind {
    /// Return the canonical display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Report => "Report",
            Self::Announcement => "Announcement",
            Self::System => "System",
        }
    }

    /// Leniently parse a kind from persisted text.
    ///
    /// Case-insensitive match against the display name; falls back to
    /// [`Self::System`] when nothing matches or the input is absent.
    pub fn parse(input: Option<&str>) -> Self {
        let Some(raw) = input else {
            return Self::System;
        };
        let trimmed = raw.trim();
        for kind in [Self::Report, Self::Announcement, Self::System] {
            if trimmed.eq_ignore_ascii_case(kind.as_str()) {
                return kind;
            }
        }
        Self::System
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl sqlx::Type<sqlx::Postgres> for NotificationKind {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for NotificationKind {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(Some(raw)))
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for NotificationKind {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}
