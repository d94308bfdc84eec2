//! # reportdesk-database
//!
//! PostgreSQL connection management, the persistence gateway trait
//! contracts, and the concrete repository implementations for all
//! Reportdesk entities.

pub mod connection;
pub mod gateway;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use gateway::{AnnouncementStore, NotificationStore, ReportStore, UserStore};
