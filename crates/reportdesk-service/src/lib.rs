//! # reportdesk-service
//!
//! Business logic service layer for Reportdesk. Each service orchestrates
//! the persistence gateway to implement application-level use cases; the
//! notification fanout service is the heart of it, translating domain
//! events into per-recipient notification rows.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references to gateway trait objects.

pub mod announcement;
pub mod notification;
pub mod report;
pub mod user;

#[cfg(test)]
pub(crate) mod testing;

pub use announcement::AnnouncementService;
pub use notification::{NotificationFanout, NotificationService};
pub use report::ReportService;
pub use user::UserService;
