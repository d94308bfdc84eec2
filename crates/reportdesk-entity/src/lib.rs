//! # reportdesk-entity
//!
//! Domain entity models and enums for Reportdesk: users, reports,
//! announcements, and notifications, plus the pure validation predicates
//! the entities use to check themselves.

pub mod announcement;
pub mod notification;
pub mod report;
pub mod user;
pub mod validation;

pub use announcement::{Announcement, NewAnnouncement};
pub use notification::{NewNotification, Notification, NotificationKind};
pub use report::{NewReport, Report, ReportStatus};
pub use user::{CreateUser, User, UserRole};
