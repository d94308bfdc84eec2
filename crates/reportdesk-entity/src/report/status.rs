//! Report status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use reportdesk_core::AppError;

/// Lifecycle status of a community report.
///
/// The ordering is informal; any status may be set from any other. Status
/// is stored as its display string and parsed back leniently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    /// Newly submitted, awaiting admin triage.
    Pending,
    /// An admin is reviewing the report.
    InReview,
    /// The report was accepted for action.
    Approved,
    /// Work on the report is underway.
    InProgress,
    /// The underlying issue was resolved.
    Resolved,
    /// The report is closed out.
    Completed,
}

/// All statuses in informal lifecycle order.
pub const ALL_STATUSES: [ReportStatus; 6] = [
    ReportStatus::Pending,
    ReportStatus::InReview,
    ReportStatus::Approved,
    ReportStatus::InProgress,
    ReportStatus::Resolved,
    ReportStatus::Completed,
];

impl ReportStatus {
    /// Return the canonical display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In Review",
            Self::Approved => "Approved",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Completed => "Completed",
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::InReview => "IN_REVIEW",
            Self::Approved => "APPROVED",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Completed => "COMPLETED",
        }
    }

    /// Leniently parse a status from persisted text.
    ///
    /// This is the decode path for stored rows; operator input goes
    /// through the strict [`FromStr`] impl instead.
    ///
    /// Tries, in order: a case-insensitive match against the display name,
    /// a trimmed lowercase *prefix* match against the display names (so
    /// "in review notes" parses as `InReview`), and a case-insensitive
    /// match against the variant name. Falls back to [`Self::Pending`] when
    /// nothing matches or the input is absent.
    ///
    /// The prefix match silently accepts strings with trailing garbage, so
    /// historical rows with annotated status text still parse.
    pub fn parse(input: Option<&str>) -> Self {
        let Some(raw) = input else {
            return Self::Pending;
        };
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            return Self::Pending;
        }
        for status in ALL_STATUSES {
            if normalized.starts_with(&status.as_str().to_lowercase()) {
                return status;
            }
        }
        for status in ALL_STATUSES {
            if normalized == status.variant_name().to_lowercase() {
                return status;
            }
        }
        Self::Pending
    }

    /// Check if the report is still awaiting triage.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Check if the report has reached a terminal status.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Resolved | Self::Completed)
    }
}

impl FromStr for ReportStatus {
    type Err = AppError;

    /// Strict parse for operator-supplied input. Unlike [`Self::parse`],
    /// unknown input is an error rather than a default, so a typo cannot
    /// silently become `Pending`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        for status in ALL_STATUSES {
            if trimmed.eq_ignore_ascii_case(status.as_str())
                || trimmed.eq_ignore_ascii_case(status.variant_name())
            {
                return Ok(status);
            }
        }
        Err(AppError::validation(format!(
            "Unknown report status '{s}'"
        )))
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl sqlx::Type<sqlx::Postgres> for ReportStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <&str as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <&str as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

impl<'r> sqlx::Decode<'r, sqlx::Postgres> for ReportStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let raw = <&str as sqlx::Decode<'r, sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(Some(raw)))
    }
}

impl<'q> sqlx::Encode<'q, sqlx::Postgres> for ReportStatus {
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
    fn test_parse_defaults_to_pending() {
        assert_eq!(ReportStatus::parse(None), ReportStatus::Pending);
        assert_eq!(ReportStatus::parse(Some("")), ReportStatus::Pending);
        assert_eq!(ReportStatus::parse(Some("garbage")), ReportStatus::Pending);
    }

    #[test]
    fn test_parse_case_and_whitespace_insensitive() {
        assert_eq!(
            ReportStatus::parse(Some("in review")),
            ReportStatus::InReview
        );
        assert_eq!(
            ReportStatus::parse(Some(" COMPLETED ")),
            ReportStatus::Completed
        );
        assert_eq!(
            ReportStatus::parse(Some("In Progress")),
            ReportStatus::InProgress
        );
    }

    #[test]
    fn test_parse_prefix_quirk() {
        // trailing garbage after a known display name still matches
        assert_eq!(
            ReportStatus::parse(Some("pending review of sorts")),
            ReportStatus::Pending
        );
        assert_eq!(
            ReportStatus::parse(Some("in review notes")),
            ReportStatus::InReview
        );
    }

    #[test]
    fn test_parse_variant_name_fallback() {
        assert_eq!(
            ReportStatus::parse(Some("IN_REVIEW")),
            ReportStatus::InReview
        );
        assert_eq!(
            ReportStatus::parse(Some("in_progress")),
            ReportStatus::InProgress
        );
    }

    #[test]
    fn test_strict_parse_rejects_unknown_input() {
        assert_eq!(
            "Resolved".parse::<ReportStatus>().unwrap(),
            ReportStatus::Resolved
        );
        assert_eq!(
            "in review".parse::<ReportStatus>().unwrap(),
            ReportStatus::InReview
        );
        assert_eq!(
            "IN_PROGRESS".parse::<ReportStatus>().unwrap(),
            ReportStatus::InProgress
        );

        // typos and trailing garbage are errors, never a default
        assert!("Resovled".parse::<ReportStatus>().is_err());
        assert!("pending review of sorts".parse::<ReportStatus>().is_err());
        assert!("".parse::<ReportStatus>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for status in ALL_STATUSES {
            assert_eq!(ReportStatus::parse(Some(status.as_str())), status);
        }
    }
}
