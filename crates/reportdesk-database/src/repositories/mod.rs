//! Concrete Postgres repository implementations.

pub mod announcement;
pub mod notification;
pub mod report;
pub mod user;

pub use announcement::AnnouncementRepository;
pub use notification::NotificationRepository;
pub use report::ReportRepository;
pub use user::UserRepository;

/// Check whether a sqlx error is a unique-constraint violation.
pub(crate) fn is_unique_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().as_deref() == Some("23505"),
        _ => false,
    }
}
